//! R-tree spatial index over node bounds.
//!
//! Backs point and rectangle queries for hit testing and marquee
//! selection, reducing them from O(n) to O(log n). Entries carry the
//! node's [`Rect`] bounds; exact point containment reuses the rectangle's
//! own test, so the index and the geometry layer cannot disagree.

use std::collections::HashMap;

use rstar::{RTree, RTreeObject, AABB};

use crate::geometry::Rect;
use crate::node::{Node, NodeId};

/// One indexed node: its id and the bounds it was last indexed with.
#[derive(Debug, Clone, Copy)]
struct SpatialEntry {
    id: NodeId,
    bounds: Rect,
}

impl SpatialEntry {
    fn from_node(node: &Node) -> Self {
        Self {
            id: node.id,
            bounds: node.bounds(),
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.x, self.bounds.y],
            [self.bounds.max_x(), self.bounds.max_y()],
        )
    }
}

// Tree removal matches on identity; the recorded bounds locate the entry.
impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Spatial index over the node set.
///
/// The side map remembers each node's indexed bounds, which is what lets
/// a re-insert find and evict the stale tree entry after a move or resize.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<NodeId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-build an index from existing nodes.
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Self {
        let entries: Vec<SpatialEntry> =
            nodes.into_iter().map(SpatialEntry::from_node).collect();
        let map = entries.iter().map(|e| (e.id, *e)).collect();
        Self {
            tree: RTree::bulk_load(entries),
            entries: map,
        }
    }

    /// Index a node's current bounds, evicting any stale entry for it.
    pub fn insert(&mut self, node: &Node) {
        let entry = SpatialEntry::from_node(node);
        if let Some(old) = self.entries.insert(node.id, entry) {
            self.tree.remove(&old);
        }
        self.tree.insert(entry);
    }

    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Nodes whose bounds contain the point (edges inclusive).
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NodeId> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .filter(|entry| entry.bounds.contains_point(x, y))
            .map(|entry| entry.id)
            .collect()
    }

    /// Nodes whose bounds intersect the rectangle's envelope.
    ///
    /// Touching edges count; callers needing open intersection or full
    /// containment refine against the node's exact bounds.
    pub fn query_rect(&self, rect: Rect) -> Vec<NodeId> {
        let envelope = AABB::from_corners([rect.x, rect.y], [rect.max_x(), rect.max_y()]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
