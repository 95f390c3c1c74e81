//! Tests for the document <-> canvas converter.
mod common;
use common::*;
use kaiwa::prelude::*;

#[test]
fn test_round_trip_preserves_document() {
    let document = create_support_flow();
    let canvas = CanvasGraph::from_document(&document);
    let flattened = canvas.to_document();

    assert_eq!(flattened, document);
}

#[test]
fn test_node_and_edge_order_preserved() {
    let document = create_support_flow();
    let canvas = CanvasGraph::from_document(&document);

    let ids: Vec<&str> = canvas.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["greeting", "question", "farewell"]);

    // Edges come out in (node, then edge-within-node) order.
    let pairs: Vec<(&str, &str)> = canvas
        .edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("greeting", "question"),
            ("question", "farewell"),
            ("question", "question"),
        ]
    );
}

#[test]
fn test_grid_layout_is_deterministic_and_distinct() {
    let document = FlowDocument {
        start_node_id: "n0".to_string(),
        nodes: (0..5)
            .map(|i| node(&format!("n{}", i), "d", "p", vec![]))
            .collect(),
    };
    let canvas = CanvasGraph::from_document(&document);

    // column = index mod 3, row = index div 3, 250 x 200 spacing.
    assert_eq!(canvas.nodes[0].position, Position { x: 0.0, y: 0.0 });
    assert_eq!(canvas.nodes[1].position, Position { x: 250.0, y: 0.0 });
    assert_eq!(canvas.nodes[2].position, Position { x: 500.0, y: 0.0 });
    assert_eq!(canvas.nodes[3].position, Position { x: 0.0, y: 200.0 });
    assert_eq!(canvas.nodes[4].position, Position { x: 250.0, y: 200.0 });

    for (i, a) in canvas.nodes.iter().enumerate() {
        for b in canvas.nodes.iter().skip(i + 1) {
            assert_ne!(a.position, b.position, "nodes must not overlap");
        }
    }
}

#[test]
fn test_parallel_edges_get_distinct_ids() {
    let document = FlowDocument {
        start_node_id: "a".to_string(),
        nodes: vec![
            node(
                "a",
                "d",
                "p",
                vec![edge("b", "first path"), edge("b", "second path")],
            ),
            node("b", "d", "p", vec![]),
        ],
    };
    let canvas = CanvasGraph::from_document(&document);

    assert_eq!(canvas.edges[0].id, "edge_a_b_0");
    assert_eq!(canvas.edges[1].id, "edge_a_b_1");
    assert_ne!(canvas.edges[0].id, canvas.edges[1].id);
}

#[test]
fn test_empty_condition_gets_placeholder_label_and_round_trips_empty() {
    let document = FlowDocument {
        start_node_id: "a".to_string(),
        nodes: vec![
            node("a", "d", "p", vec![edge("b", "")]),
            node("b", "d", "p", vec![]),
        ],
    };
    let canvas = CanvasGraph::from_document(&document);

    // The placeholder is a display affordance only.
    assert_eq!(canvas.edges[0].label, UNSET_CONDITION_LABEL);
    assert_eq!(canvas.edges[0].condition.as_deref(), Some(""));

    // Condition data is authoritative on the way back: the placeholder never
    // leaks into the document.
    let flattened = canvas.to_document();
    assert_eq!(flattened.nodes[0].edges[0].condition, "");
    assert_eq!(flattened, document);
}

#[test]
fn test_label_stands_in_when_condition_data_is_absent() {
    let mut canvas = CanvasGraph::from_document(&create_support_flow());
    canvas.edges[0].condition = None;
    canvas.edges[0].label = "user typed this".to_string();

    let flattened = canvas.to_document();
    assert_eq!(flattened.nodes[0].edges[0].condition, "user typed this");
}

#[test]
fn test_flattening_ignores_stale_node_edge_cache() {
    let document = create_support_flow();
    let mut canvas = CanvasGraph::from_document(&document);

    // Poison the carried per-node snapshot; the live edge set is untouched.
    canvas.nodes[0].edges = vec![FlowEdge {
        to_node_id: "nowhere".to_string(),
        condition: "stale".to_string(),
        parameters: None,
    }];

    let flattened = canvas.to_document();
    assert_eq!(flattened, document, "live edge set is authoritative");
}

#[test]
fn test_start_node_passthrough() {
    let document = create_support_flow();
    let canvas = CanvasGraph::from_document(&document);
    assert_eq!(canvas.start_node_id.as_deref(), Some("greeting"));

    let empty = FlowDocument::default();
    let canvas = CanvasGraph::from_document(&empty);
    assert_eq!(canvas.start_node_id, None);
    assert_eq!(canvas.to_document().start_node_id, "");
}

#[test]
fn test_parameters_carried_through_round_trip() {
    let document = create_support_flow();
    let canvas = CanvasGraph::from_document(&document);

    let with_params = canvas
        .edges
        .iter()
        .find(|e| e.target == "farewell")
        .expect("edge to farewell exists");
    assert_eq!(
        with_params
            .parameters
            .as_ref()
            .and_then(|p| p.get("sentiment"))
            .map(String::as_str),
        Some("positive")
    );

    let flattened = canvas.to_document();
    assert_eq!(flattened.nodes[1].edges[0].parameters, document.nodes[1].edges[0].parameters);
}
