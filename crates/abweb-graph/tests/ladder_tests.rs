//! Integration tests for the editable web: the full ladder walkthrough,
//! cascade deletion, and export/import across module boundaries.

use abweb_core::NodeId;
use abweb_graph::document::WebDocument;
use abweb_graph::projection::{node_summaries, Projection};
use abweb_graph::store::{GraphError, Web};

/// Build the walkthrough web:
/// set_root("Q0") -> add_above(0, "Q1") -> add_below(1, "Q2")
fn build_walkthrough() -> Web {
    let mut web = Web::new();
    let root = web.set_root("Q0");
    assert_eq!(root, NodeId::new(0));
    let above = web.add_above(root, "Q1").unwrap();
    assert_eq!(above, NodeId::new(1));
    let below = web.add_below(above, "Q2").unwrap();
    assert_eq!(below, NodeId::new(2));
    web
}

#[test]
fn walkthrough_state_matches_expectations() {
    let web = build_walkthrough();

    assert_eq!(web.node(NodeId::new(0)).map(|q| (q.text.as_str(), q.level)), Some(("Q0", 0)));
    assert_eq!(web.node(NodeId::new(1)).map(|q| (q.text.as_str(), q.level)), Some(("Q1", 1)));
    assert_eq!(web.node(NodeId::new(2)).map(|q| (q.text.as_str(), q.level)), Some(("Q2", 0)));

    assert_eq!(web.root(), Some(NodeId::new(0)));
    assert_eq!(web.current(), Some(NodeId::new(2)));
    assert_eq!(web.id_counter(), 3);
}

#[test]
fn walkthrough_export_matches_wire_format() {
    let doc = WebDocument::from_web(&build_walkthrough());
    let value = serde_json::to_value(&doc).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "nodes": [
                {"id": 0, "text": "Q0", "level": 0},
                {"id": 1, "text": "Q1", "level": 1},
                {"id": 2, "text": "Q2", "level": 0},
            ],
            "edges": [
                {"source": 1, "target": 0},
                {"source": 1, "target": 2},
            ],
            "current_id": 2,
            "root_id": 0,
            "id_counter": 3,
        })
    );
}

#[test]
fn deleting_the_middle_node_cascades_and_keeps_current() {
    let mut web = build_walkthrough();

    // Current is 2, not 1, so it must survive the deletion untouched.
    web.delete_node(NodeId::new(1)).unwrap();

    assert!(!web.contains(NodeId::new(1)));
    assert!(web.contains(NodeId::new(0)));
    assert!(web.contains(NodeId::new(2)));
    assert!(web.edges().is_empty());
    assert_eq!(web.current(), Some(NodeId::new(2)));
}

#[test]
fn deleting_the_current_node_falls_back_to_minimum_id() {
    let mut web = build_walkthrough();

    web.delete_node(NodeId::new(2)).unwrap();
    assert_eq!(web.current(), Some(NodeId::new(0)));
}

#[test]
fn import_replaces_the_store_wholesale() {
    let mut web = build_walkthrough();
    let doc = WebDocument::from_web(&web);

    // Mutate further, then restore the snapshot.
    web.add_below(NodeId::new(2), "Q3").unwrap();
    web.delete_node(NodeId::new(0)).unwrap();

    let restored = doc.into_web().unwrap();
    assert_eq!(restored, build_walkthrough());
}

#[test]
fn errors_do_not_disturb_the_store() {
    let mut web = build_walkthrough();
    let snapshot = web.clone();

    let missing = NodeId::new(99);
    assert_eq!(web.add_above(missing, "x"), Err(GraphError::NodeNotFound(missing)));
    assert_eq!(web.add_edge(NodeId::new(0), missing), Err(GraphError::NodeNotFound(missing)));
    assert_eq!(web.edit_text(missing, "x"), Err(GraphError::NodeNotFound(missing)));
    assert_eq!(web.delete_node(missing), Err(GraphError::NodeNotFound(missing)));

    assert_eq!(web, snapshot);
}

#[test]
fn projection_tracks_mutations() {
    let mut web = build_walkthrough();

    let projection = Projection::from_web(&web);
    assert_eq!(projection.nodes.len(), 3);
    assert_eq!(projection.edges.len(), 2);

    web.delete_node(NodeId::new(1)).unwrap();
    let projection = Projection::from_web(&web);
    assert_eq!(projection.nodes.len(), 2);
    assert!(projection.edges.is_empty());

    // Only the current node carries the thick border.
    let thick: Vec<u64> =
        projection.nodes.iter().filter(|n| n.border_width == 3).map(|n| n.id).collect();
    assert_eq!(thick, vec![2]);
}

#[test]
fn summaries_follow_id_order() {
    let web = build_walkthrough();
    let summaries = node_summaries(&web);
    let ids: Vec<u64> = summaries.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(summaries[1].level, 1);
    assert_eq!(summaries[1].preview, "Q1");
}

#[test]
fn levels_can_descend_below_zero() {
    let mut web = Web::new();
    let root = web.set_root("Q0");
    let below = web.add_below(root, "more concrete").unwrap();
    let deeper = web.add_below(below, "even more concrete").unwrap();

    assert_eq!(web.node(below).map(|q| q.level), Some(-1));
    assert_eq!(web.node(deeper).map(|q| q.level), Some(-2));

    // Round-trip keeps negative levels.
    let restored = WebDocument::from_web(&web).into_web().unwrap();
    assert_eq!(web, restored);
}
