use super::types::{CanvasEdge, CanvasGraph, CanvasNode, Position};
use crate::flow::{FlowDocument, FlowEdge, FlowNode};

/// Label shown on an edge whose condition has not been set yet. An editing
/// affordance, not a validation signal.
pub const UNSET_CONDITION_LABEL: &str = "Click to edit condition";

/// Nodes per row in the default import layout.
const GRID_COLUMNS: usize = 3;
/// Horizontal spacing between grid columns.
const COLUMN_SPACING: f64 = 250.0;
/// Vertical spacing between grid rows.
const ROW_SPACING: f64 = 200.0;

/// Grid position for the node at `index` in document order. Distinct
/// indices map to distinct positions so an imported flow renders without
/// overlap; the exact coordinates carry no meaning.
pub fn grid_position(index: usize) -> Position {
    Position {
        x: (index % GRID_COLUMNS) as f64 * COLUMN_SPACING,
        y: (index / GRID_COLUMNS) as f64 * ROW_SPACING,
    }
}

/// Stable canvas id for the `index`-th edge out of `source`. The index
/// disambiguates parallel edges between the same node pair.
pub fn canvas_edge_id(source: &str, target: &str, index: usize) -> String {
    format!("edge_{}_{}_{}", source, target, index)
}

impl CanvasGraph {
    /// Project a canonical document onto a freshly laid-out canvas.
    ///
    /// Nodes come out in document order on a fixed grid; edges come out in
    /// (node, then edge-within-node) order, each with a synthesized stable
    /// id. The projection is pure and deterministic.
    pub fn from_document(document: &FlowDocument) -> Self {
        let nodes = document
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| CanvasNode {
                id: node.id.clone(),
                position: grid_position(index),
                label: node.id.clone(),
                description: node.description.clone(),
                prompt: node.prompt.clone(),
                edges: node.edges.clone(),
            })
            .collect();

        let mut edges = Vec::with_capacity(document.edge_count());
        for node in &document.nodes {
            for (edge_index, edge) in node.edges.iter().enumerate() {
                let label = if edge.condition.is_empty() {
                    UNSET_CONDITION_LABEL.to_string()
                } else {
                    edge.condition.clone()
                };
                edges.push(CanvasEdge {
                    id: canvas_edge_id(&node.id, &edge.to_node_id, edge_index),
                    source: node.id.clone(),
                    target: edge.to_node_id.clone(),
                    label,
                    condition: Some(edge.condition.clone()),
                    parameters: edge.parameters.clone(),
                });
            }
        }

        let start_node_id = if document.start_node_id.is_empty() {
            None
        } else {
            Some(document.start_node_id.clone())
        };

        CanvasGraph {
            nodes,
            edges,
            start_node_id,
        }
    }

    /// Flatten the canvas back into its canonical document.
    ///
    /// Each node's edge list is rebuilt by scanning the graph's edge set for
    /// edges whose source matches the node; the node's own carried `edges`
    /// snapshot is never consulted, so a stale snapshot cannot leak into the
    /// document. Node order and per-node edge order follow the canvas
    /// iteration order.
    pub fn to_document(&self) -> FlowDocument {
        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let edges = self
                    .edges
                    .iter()
                    .filter(|edge| edge.source == node.id)
                    .map(|edge| FlowEdge {
                        to_node_id: edge.target.clone(),
                        // Condition data is authoritative once present; the
                        // display label only stands in when it is absent.
                        condition: edge
                            .condition
                            .clone()
                            .unwrap_or_else(|| edge.label.clone()),
                        parameters: edge.parameters.clone(),
                    })
                    .collect();

                FlowNode {
                    id: node.id.clone(),
                    description: node.description.clone(),
                    prompt: node.prompt.clone(),
                    edges,
                }
            })
            .collect();

        FlowDocument {
            start_node_id: self.start_node_id.clone().unwrap_or_default(),
            nodes,
        }
    }
}
