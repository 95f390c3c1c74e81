//! Common test utilities for building flow documents.
use ahash::AHashMap;
use kaiwa::prelude::*;

/// Builds a node with the given fields.
#[allow(dead_code)]
pub fn node(id: &str, description: &str, prompt: &str, edges: Vec<FlowEdge>) -> FlowNode {
    FlowNode {
        id: id.to_string(),
        description: description.to_string(),
        prompt: prompt.to_string(),
        edges,
    }
}

/// Builds an edge with no parameters.
#[allow(dead_code)]
pub fn edge(to_node_id: &str, condition: &str) -> FlowEdge {
    FlowEdge {
        to_node_id: to_node_id.to_string(),
        condition: condition.to_string(),
        parameters: None,
    }
}

/// Builds a parameter mapping from key/value pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> Option<AHashMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// Creates a small, fully valid support-bot flow.
///
/// `greeting` (start) -> `question` -> `farewell`; every non-start node is
/// the target of some edge, so validation yields no errors.
#[allow(dead_code)]
pub fn create_support_flow() -> FlowDocument {
    FlowDocument {
        start_node_id: "greeting".to_string(),
        nodes: vec![
            node(
                "greeting",
                "Opens the conversation",
                "Hello! How can I help you today?",
                vec![edge("question", "user describes a problem")],
            ),
            node(
                "question",
                "Narrows down the problem",
                "Can you tell me more about the issue?",
                vec![
                    FlowEdge {
                        to_node_id: "farewell".to_string(),
                        condition: "problem resolved".to_string(),
                        parameters: params(&[("sentiment", "positive")]),
                    },
                    edge("question", "needs more detail"),
                ],
            ),
            node(
                "farewell",
                "Closes the conversation",
                "Glad I could help. Goodbye!",
                vec![],
            ),
        ],
    }
}

/// Creates a flow with every class of violation the validator reports:
/// missing start target, duplicate ids, blank fields, a dangling edge, and
/// a disconnected node.
#[allow(dead_code)]
pub fn create_broken_flow() -> FlowDocument {
    FlowDocument {
        start_node_id: "missing".to_string(),
        nodes: vec![
            node("a", "", "", vec![edge("ghost", ""), edge("a", "retry")]),
            node("a", "Duplicate", "Also a", vec![]),
            node("orphan", "Unreferenced", "Nobody points here", vec![]),
        ],
    }
}
