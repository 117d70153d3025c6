//! Selection flows: marquee, hit-testing after edits, stale id cleanup.

use boardcore::{hit_test, DeleteNodes, History, MoveNodes, Rect, Selection};

use crate::helpers::grid_store;

#[test]
fn test_marquee_partial_vs_full_containment() {
    let store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();
    // Covers all of "a", clips into "b"
    let marquee = Rect::new(-10.0, -10.0, 260.0, 120.0);

    let mut partial = Selection::new();
    partial.select_in_rect(&store, marquee, false, true);
    assert_eq!(partial.ids(), &[ids[0], ids[1]]);

    let mut full = Selection::new();
    full.select_in_rect(&store, marquee, false, false);
    assert_eq!(full.ids(), &[ids[0]]);
}

#[test]
fn test_marquee_touching_edge_does_not_select() {
    let store = grid_store();
    // Shares only the x=100 edge with "a"
    let marquee = Rect::new(100.0, 0.0, 50.0, 50.0);

    let mut selection = Selection::new();
    selection.select_in_rect(&store, marquee, false, true);
    assert!(selection.is_empty());
}

#[test]
fn test_marquee_append_accumulates() {
    let store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();

    let mut selection = Selection::new();
    selection.select_in_rect(&store, Rect::new(-10.0, -10.0, 120.0, 120.0), false, true);
    selection.select_in_rect(&store, Rect::new(190.0, 190.0, 120.0, 120.0), true, true);
    assert_eq!(selection.ids(), &[ids[0], ids[3]]);
}

#[test]
fn test_hit_test_tracks_moved_nodes() {
    let mut store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();

    let mut history = History::new();
    history.push(Box::new(MoveNodes::new(vec![ids[0]], 1000.0, 0.0)), &mut store);

    assert_eq!(hit_test(&store, 1050.0, 50.0), Some(ids[0]));
    assert_eq!(hit_test(&store, 50.0, 50.0), None);

    history.undo(&mut store);
    assert_eq!(hit_test(&store, 50.0, 50.0), Some(ids[0]));
}

#[test]
fn test_overlapping_nodes_hit_topmost() {
    let mut store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();

    // Slide "d" (z = 3) over "a" (z = 0)
    let mut history = History::new();
    history.push(
        Box::new(MoveNodes::new(vec![ids[3]], -200.0, -200.0)),
        &mut store,
    );
    assert_eq!(hit_test(&store, 50.0, 50.0), Some(ids[3]));
}

#[test]
fn test_selection_survives_delete_via_retain_live() {
    let mut store = grid_store();
    let ids: Vec<_> = store.iter().map(|n| n.id).collect();

    let mut selection = Selection::new();
    selection.set(&[ids[0], ids[1]], false);

    let mut history = History::new();
    history.push(Box::new(DeleteNodes::new(vec![ids[1]])), &mut store);
    selection.retain_live(&store);
    assert_eq!(selection.ids(), &[ids[0]]);

    // Undo brings the node back; the selection stays as the user left it
    history.undo(&mut store);
    assert_eq!(selection.ids(), &[ids[0]]);
    assert_eq!(selection.selected_nodes(&store).count(), 1);
}
