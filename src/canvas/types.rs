use crate::flow::FlowEdge;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// A 2-D layout coordinate on the canvas.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A positioned dialogue node, ready for rendering.
///
/// Carries a copy of the node's document fields alongside its layout
/// position. The `edges` field is a carried-through snapshot only; the
/// authoritative adjacency lives in [`CanvasGraph::edges`] and is what the
/// flattening projection reads.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CanvasNode {
    pub id: String,
    pub position: Position,
    /// Display label, mirrors the node id.
    pub label: String,
    pub description: String,
    pub prompt: String,
    pub edges: Vec<FlowEdge>,
}

/// A positioned transition between two canvas nodes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CanvasEdge {
    /// Stable key for point-edits, unique even between parallel edges.
    pub id: String,
    pub source: String,
    pub target: String,
    /// Display label, mirrors the condition (or a placeholder when unset).
    pub label: String,
    /// Structured condition data. Authoritative whenever present, even when
    /// present but empty; `None` only for edges created without condition
    /// data (e.g. a fresh canvas connection), where the label stands in.
    pub condition: Option<String>,
    pub parameters: Option<AHashMap<String, String>>,
}

/// The editable, renderable projection of a flow document.
///
/// This is a derived view, not a second source of truth: it is regenerated
/// wholesale from a [`FlowDocument`](crate::flow::FlowDocument) on import and
/// flattened back on every read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct CanvasGraph {
    pub nodes: Vec<CanvasNode>,
    pub edges: Vec<CanvasEdge>,
    pub start_node_id: Option<String>,
}

impl CanvasGraph {
    /// Look up a canvas node by id.
    pub fn node(&self, id: &str) -> Option<&CanvasNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a canvas edge by its stable id.
    pub fn edge(&self, id: &str) -> Option<&CanvasEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}
