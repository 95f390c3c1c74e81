//! The edit layer: owns the mutable canvas state between imports.
//!
//! [`FlowEditor`] is the stateful counterpart to the pure converter and
//! validator. It holds the current [`CanvasGraph`], the selection, and the
//! start-node designation, and applies node/edge edits while keeping those
//! consistent (deleting a node drops its incident edges, renaming a node
//! rewrites every reference in one step). On every read the canonical
//! document is re-derived wholesale; nothing incremental is cached.

use crate::canvas::{CanvasEdge, CanvasGraph, CanvasNode, UNSET_CONDITION_LABEL, grid_position};
use crate::error::{EditError, ImportError};
use crate::flow::FlowDocument;
use crate::validation::{ValidationError, validate};
use ahash::AHashMap;

/// Interactive editing state for a single flow.
#[derive(Debug, Clone, Default)]
pub struct FlowEditor {
    graph: CanvasGraph,
    selected_node: Option<String>,
    selected_edge: Option<String>,
    /// Monotonic source for generated node and edge ids.
    next_seq: u64,
}

impl FlowEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing from an existing document.
    pub fn from_document(document: &FlowDocument) -> Self {
        Self {
            graph: CanvasGraph::from_document(document),
            ..Self::default()
        }
    }

    /// The current canvas state.
    pub fn graph(&self) -> &CanvasGraph {
        &self.graph
    }

    pub fn selected_node(&self) -> Option<&str> {
        self.selected_node.as_deref()
    }

    pub fn selected_edge(&self) -> Option<&str> {
        self.selected_edge.as_deref()
    }

    fn next_id(&mut self, prefix: &str) -> String {
        loop {
            let id = format!("{}_{}", prefix, self.next_seq);
            self.next_seq += 1;
            if self.graph.node(&id).is_none() && self.graph.edge(&id).is_none() {
                return id;
            }
        }
    }

    /// Add a fresh, empty node and return its generated id.
    ///
    /// The first node added to an empty flow becomes the start node.
    pub fn add_node(&mut self) -> String {
        let id = self.next_id("node");
        let position = grid_position(self.graph.nodes.len());
        self.graph.nodes.push(CanvasNode {
            id: id.clone(),
            position,
            label: id.clone(),
            description: String::new(),
            prompt: String::new(),
            edges: Vec::new(),
        });
        if self.graph.start_node_id.is_none() {
            self.graph.start_node_id = Some(id.clone());
        }
        id
    }

    /// Remove a node together with every edge touching it. If it was the
    /// start node, the first remaining node (if any) takes over; a matching
    /// selection is cleared.
    pub fn delete_node(&mut self, node_id: &str) {
        self.graph.nodes.retain(|n| n.id != node_id);
        self.graph
            .edges
            .retain(|e| e.source != node_id && e.target != node_id);
        if self.graph.start_node_id.as_deref() == Some(node_id) {
            self.graph.start_node_id = self.graph.nodes.first().map(|n| n.id.clone());
        }
        if self.selected_node.as_deref() == Some(node_id) {
            self.selected_node = None;
        }
    }

    /// Rename a node, rewriting every reference to its id in one atomic
    /// update: the node itself and its label, each edge's source and target,
    /// the start-node pointer, and the current selection. On error nothing
    /// has changed.
    pub fn rename_node(&mut self, old_id: &str, new_id: &str) -> Result<(), EditError> {
        if self.graph.node(old_id).is_none() {
            return Err(EditError::NodeNotFound {
                node_id: old_id.to_string(),
            });
        }

        let mut graph = self.graph.clone();
        for node in &mut graph.nodes {
            if node.id == old_id {
                node.id = new_id.to_string();
                node.label = new_id.to_string();
            }
        }
        for edge in &mut graph.edges {
            if edge.source == old_id {
                edge.source = new_id.to_string();
            }
            if edge.target == old_id {
                edge.target = new_id.to_string();
            }
        }
        if graph.start_node_id.as_deref() == Some(old_id) {
            graph.start_node_id = Some(new_id.to_string());
        }

        self.graph = graph;
        if self.selected_node.as_deref() == Some(old_id) {
            self.selected_node = Some(new_id.to_string());
        }
        Ok(())
    }

    pub fn set_description(&mut self, node_id: &str, text: &str) -> Result<(), EditError> {
        let node = self.node_mut(node_id)?;
        node.description = text.to_string();
        Ok(())
    }

    pub fn set_prompt(&mut self, node_id: &str, text: &str) -> Result<(), EditError> {
        let node = self.node_mut(node_id)?;
        node.prompt = text.to_string();
        Ok(())
    }

    /// Designate an existing node as the start state.
    pub fn set_start_node(&mut self, node_id: &str) -> Result<(), EditError> {
        if self.graph.node(node_id).is_none() {
            return Err(EditError::NodeNotFound {
                node_id: node_id.to_string(),
            });
        }
        self.graph.start_node_id = Some(node_id.to_string());
        Ok(())
    }

    /// A raw canvas connection: fresh edge with no condition data yet, only
    /// the placeholder label. Until a condition is set, the label stands in
    /// for it when the document is flattened.
    pub fn connect(&mut self, source: &str, target: &str) -> String {
        let id = self.fresh_edge_id(source, target);
        self.graph.edges.push(CanvasEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            label: UNSET_CONDITION_LABEL.to_string(),
            condition: None,
            parameters: None,
        });
        id
    }

    /// Add an edge with empty condition data, as the node sidebar does.
    pub fn add_edge(&mut self, source: &str, target: &str) -> String {
        let id = self.fresh_edge_id(source, target);
        self.graph.edges.push(CanvasEdge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            label: UNSET_CONDITION_LABEL.to_string(),
            condition: Some(String::new()),
            parameters: Some(AHashMap::new()),
        });
        id
    }

    /// Update an edge's condition data, parameters, and optionally its
    /// target. The display label is re-derived from the condition.
    pub fn update_edge(
        &mut self,
        edge_id: &str,
        condition: &str,
        parameters: Option<AHashMap<String, String>>,
        new_target: Option<&str>,
    ) -> Result<(), EditError> {
        let edge = self
            .graph
            .edges
            .iter_mut()
            .find(|e| e.id == edge_id)
            .ok_or_else(|| EditError::EdgeNotFound {
                edge_id: edge_id.to_string(),
            })?;

        if let Some(target) = new_target {
            edge.target = target.to_string();
        }
        edge.label = if condition.is_empty() {
            UNSET_CONDITION_LABEL.to_string()
        } else {
            condition.to_string()
        };
        edge.condition = Some(condition.to_string());
        edge.parameters = parameters;
        Ok(())
    }

    pub fn delete_edge(&mut self, edge_id: &str) {
        self.graph.edges.retain(|e| e.id != edge_id);
        if self.selected_edge.as_deref() == Some(edge_id) {
            self.selected_edge = None;
        }
    }

    pub fn select_node(&mut self, node_id: &str) {
        self.selected_node = Some(node_id.to_string());
        self.selected_edge = None;
    }

    pub fn select_edge(&mut self, edge_id: &str) {
        self.selected_edge = Some(edge_id.to_string());
        self.selected_node = None;
    }

    pub fn clear_selection(&mut self) {
        self.selected_node = None;
        self.selected_edge = None;
    }

    /// Flatten the current canvas into its canonical document. Recomputed in
    /// full on every call.
    pub fn document(&self) -> FlowDocument {
        self.graph.to_document()
    }

    /// Validate the current state.
    pub fn validate(&self) -> Vec<ValidationError> {
        validate(&self.document())
    }

    /// The subset of current violations belonging to one node, matched by
    /// field tag, as a sidebar would display them.
    pub fn errors_for_node(&self, node_id: &str) -> Vec<ValidationError> {
        self.validate()
            .into_iter()
            .filter(|e| e.concerns(node_id))
            .collect()
    }

    /// Replace the editing state wholesale with a freshly imported document.
    pub fn import(&mut self, document: &FlowDocument) {
        self.graph = CanvasGraph::from_document(document);
        self.clear_selection();
    }

    /// Parse and import raw JSON. Parse failures leave the current state
    /// untouched; this is the edit layer's boundary responsibility.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let document = FlowDocument::from_json(json)?;
        self.import(&document);
        Ok(())
    }

    pub fn export_json(&self) -> String {
        self.document().to_json()
    }

    pub fn export_json_pretty(&self) -> String {
        self.document().to_json_pretty()
    }

    fn fresh_edge_id(&mut self, source: &str, target: &str) -> String {
        loop {
            let id = format!("edge_{}_{}_{}", source, target, self.next_seq);
            self.next_seq += 1;
            if self.graph.edge(&id).is_none() {
                return id;
            }
        }
    }

    fn node_mut(&mut self, node_id: &str) -> Result<&mut CanvasNode, EditError> {
        self.graph
            .nodes
            .iter_mut()
            .find(|n| n.id == node_id)
            .ok_or_else(|| EditError::NodeNotFound {
                node_id: node_id.to_string(),
            })
    }
}
