//! Structural and semantic validation of flow documents.
//!
//! [`validate`] inspects a [`FlowDocument`] and returns every violation it
//! finds as data. It is pure, total, and non-short-circuiting: a document
//! missing half its fields just produces more errors, never a panic, so the
//! edit layer can re-validate on every keystroke.

use crate::flow::FlowDocument;
use ahash::AHashSet;
use serde::Serialize;

/// A single validation violation.
///
/// `field` is a filterable tag, not a formal schema: it encodes the node id,
/// edge index, and violation kind with enough context that a consumer can
/// select the errors belonging to one node or edge by substring match.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error belongs to the given node, by substring match on
    /// the field tag.
    pub fn concerns(&self, node_id: &str) -> bool {
        self.field.contains(node_id)
    }
}

/// Validate a flow document, returning all violations in deterministic order.
///
/// Checks, in order: start node presence and existence, duplicate node ids,
/// then per node (in sequence order) the required fields followed by that
/// node's edges, and finally the weak disconnection check. Whitespace-only
/// text counts as empty.
pub fn validate(document: &FlowDocument) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_start_node(document, &mut errors);
    check_duplicate_ids(document, &mut errors);
    check_nodes(document, &mut errors);
    check_disconnected(document, &mut errors);

    errors
}

fn check_start_node(document: &FlowDocument, errors: &mut Vec<ValidationError>) {
    if document.start_node_id.is_empty() {
        errors.push(ValidationError::new(
            "start_node_id",
            "Start node must be specified",
        ));
    } else if document.node(&document.start_node_id).is_none() {
        errors.push(ValidationError::new(
            "start_node_id",
            format!(
                "Start node \"{}\" does not exist",
                document.start_node_id
            ),
        ));
    }
}

/// One error per occurrence after the first: an id appearing three times
/// yields two duplicate errors.
fn check_duplicate_ids(document: &FlowDocument, errors: &mut Vec<ValidationError>) {
    let mut seen: AHashSet<&str> = AHashSet::with_capacity(document.nodes.len());
    for node in &document.nodes {
        if !seen.insert(node.id.as_str()) {
            errors.push(ValidationError::new(
                format!("node_{}", node.id),
                format!("Duplicate node ID: \"{}\"", node.id),
            ));
        }
    }
}

fn check_nodes(document: &FlowDocument, errors: &mut Vec<ValidationError>) {
    for node in &document.nodes {
        if node.id.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("node_{}_id", node.id),
                "Node ID is required",
            ));
        }

        if node.description.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("node_{}_description", node.id),
                format!("Description is required for node \"{}\"", node.id),
            ));
        }

        if node.prompt.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("node_{}_prompt", node.id),
                format!("Prompt is required for node \"{}\"", node.id),
            ));
        }

        for (index, edge) in node.edges.iter().enumerate() {
            if edge.condition.trim().is_empty() {
                errors.push(ValidationError::new(
                    format!("node_{}_edge_{}_condition", node.id, index),
                    format!("Condition is required for edge from \"{}\"", node.id),
                ));
            }

            if document.node(&edge.to_node_id).is_none() {
                errors.push(ValidationError::new(
                    format!("node_{}_edge_{}_target", node.id, index),
                    format!("Target node \"{}\" does not exist", edge.to_node_id),
                ));
            }
        }
    }
}

/// Weak connectivity: a node counts as connected if it is the start node or
/// the target of any edge. This is an incoming-reference check, not a
/// reachability traversal from the start; an isolated cycle passes it.
/// Preserved as-is for compatibility with existing consumers.
fn check_disconnected(document: &FlowDocument, errors: &mut Vec<ValidationError>) {
    let mut referenced: AHashSet<&str> = AHashSet::new();
    if !document.start_node_id.is_empty() {
        referenced.insert(document.start_node_id.as_str());
    }
    for node in &document.nodes {
        for edge in &node.edges {
            referenced.insert(edge.to_node_id.as_str());
        }
    }

    for node in &document.nodes {
        if !referenced.contains(node.id.as_str()) && node.id != document.start_node_id {
            errors.push(ValidationError::new(
                format!("node_{}_disconnected", node.id),
                format!("Node \"{}\" is disconnected from the flow", node.id),
            ));
        }
    }
}
