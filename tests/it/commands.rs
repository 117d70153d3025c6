//! Document editing flows: command batches, history laws, persistence.

use boardcore::{
    Corner, CreateNode, DeleteNodes, GroupNodes, History, MoveNodes, Node, NodeStore, ResizeNodes,
};

use crate::helpers::{grid_store, text_node};

#[test]
fn test_mixed_session_unwinds_and_replays_exactly() {
    let mut store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();
    let initial: Vec<Node> = store.nodes().to_vec();

    let mut history = History::new();
    history.push(
        Box::new(CreateNode::new(text_node(500.0, 500.0, 80.0, 40.0, 4.0, "e"))),
        &mut store,
    );
    history.push(
        Box::new(MoveNodes::new(vec![ids[0], ids[1]], 25.0, -10.0)),
        &mut store,
    );
    history.push(
        Box::new(ResizeNodes::new(vec![ids[2]], Corner::BottomRight, -50.0, -30.0)),
        &mut store,
    );
    history.push(Box::new(DeleteNodes::new(vec![ids[1]])), &mut store);
    history.push(
        Box::new(GroupNodes::new(vec![ids[0], ids[3]])),
        &mut store,
    );
    let final_state: Vec<Node> = store.nodes().to_vec();

    // Five commands unwind to the untouched document
    for _ in 0..5 {
        assert!(history.undo(&mut store));
    }
    assert!(!history.undo(&mut store));
    assert_eq!(store.nodes(), &initial[..]);

    // And replay to the exact final state
    for _ in 0..5 {
        assert!(history.redo(&mut store));
    }
    assert!(!history.redo(&mut store));
    assert_eq!(store.nodes(), &final_state[..]);
}

#[test]
fn test_fresh_command_after_undo_discards_redo_branch() {
    let mut store = NodeStore::new();
    let mut history = History::new();

    history.push(
        Box::new(CreateNode::new(text_node(0.0, 0.0, 50.0, 50.0, 0.0, "a"))),
        &mut store,
    );
    history.push(
        Box::new(CreateNode::new(text_node(100.0, 0.0, 50.0, 50.0, 1.0, "b"))),
        &mut store,
    );
    history.undo(&mut store);
    assert!(history.can_redo());

    history.push(
        Box::new(CreateNode::new(text_node(200.0, 0.0, 50.0, 50.0, 1.0, "c"))),
        &mut store,
    );
    assert!(!history.can_redo());
    assert!(!history.redo(&mut store));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_group_then_ungroup_via_undo_keeps_spatial_queries_working() {
    let mut store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();

    let mut history = History::new();
    let cmd = GroupNodes::new(ids.clone());
    let group_id = cmd.group_id();
    history.push(Box::new(cmd), &mut store);

    // Only the group remains addressable; it spans the whole grid
    assert_eq!(store.len(), 1);
    assert_eq!(store.query_point(50.0, 50.0), vec![group_id]);
    assert_eq!(store.query_point(250.0, 250.0), vec![group_id]);

    history.undo(&mut store);
    assert_eq!(store.len(), 4);
    assert!(!store.contains(group_id));
    assert_eq!(store.query_point(50.0, 50.0), vec![ids[0]]);
    assert!(store.iter().all(|n| n.group.is_none()));
}

#[test]
fn test_partial_id_match_groups_only_matches() {
    let mut store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();

    let mut history = History::new();
    let cmd = GroupNodes::new(vec![ids[0], boardcore::NodeId::new(), ids[3]]);
    let group_id = cmd.group_id();
    history.push(Box::new(cmd), &mut store);

    assert_eq!(store.len(), 3);
    let group = store.get(group_id).unwrap();
    assert_eq!((group.x, group.y), (0.0, 0.0));
    assert_eq!((group.w, group.h), (300.0, 300.0));
    // Above the grid's highest z of 3
    assert_eq!(group.z, 4.0);
}

#[test]
fn test_document_round_trips_through_json() {
    let mut store = grid_store();
    let ids: Vec<_> = store.iter().take(2).map(|n| n.id).collect();
    let mut history = History::new();
    history.push(Box::new(GroupNodes::new(ids)), &mut store);

    let json = serde_json::to_string(store.nodes()).unwrap();
    let restored: Vec<Node> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, store.nodes());

    // Reloading rebuilds a store with working queries
    let reloaded = NodeStore::from_nodes(restored);
    assert_eq!(reloaded.len(), store.len());
    assert_eq!(
        reloaded.query_point(250.0, 250.0),
        store.query_point(250.0, 250.0)
    );
}
