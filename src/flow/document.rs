use crate::error::ImportError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;

/// The complete, canonical definition of a conversational flow.
///
/// This is the shape persisted and exchanged as the flow's JSON document.
/// The wire format uses the snake_case field names shown on the structs;
/// it is the one byte-exact contract the crate exposes.
///
/// Construction never rejects: duplicate ids, dangling edge targets, and
/// empty required fields are reported by
/// [`validate`](crate::validation::validate), not at build time, so a
/// half-edited flow stays representable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FlowDocument {
    #[serde(default)]
    pub start_node_id: String,
    #[serde(default)]
    pub nodes: Vec<FlowNode>,
}

/// A single dialogue state in the flow.
///
/// A node owns its outgoing edges only; incoming edges are derivable by
/// scanning other nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FlowNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub edges: Vec<FlowEdge>,
}

/// A labeled transition out of its owning node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FlowEdge {
    #[serde(default)]
    pub to_node_id: String,
    #[serde(default)]
    pub condition: String,
    /// Absent is equivalent to an empty mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<AHashMap<String, String>>,
}

impl FlowDocument {
    /// Parse a flow document from its JSON wire representation.
    ///
    /// This is the crate's import boundary: it is the only place malformed
    /// external input surfaces as an error. Once parsed, every downstream
    /// operation is total.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        serde_json::from_str(json).map_err(|e| ImportError::JsonParse(e.to_string()))
    }

    /// Load a flow document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ImportError> {
        let content = fs::read_to_string(path).map_err(|e| ImportError::FileRead {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    /// Serialize to the compact wire representation.
    pub fn to_json(&self) -> String {
        // Serialization of these plain data structs cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Serialize to an indented wire representation, for display or export.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Look up a node by id. Returns the first match when ids are duplicated.
    pub fn node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Total number of edges across all nodes.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum()
    }
}
