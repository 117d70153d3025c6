//! The node store: the document's ordered node collection.
//!
//! Insertion order is the z tie-break; paint order is a stable sort by `z`
//! ascending. A spatial index is kept in sync with every structural
//! mutation. Code that edits a node's geometry through `get_mut` must call
//! [`NodeStore::update_spatial_index`] afterwards.

use crate::geometry::Rect;
use crate::node::{Node, NodeId};
use crate::spatial_index::SpatialIndex;

/// Ordered collection of document nodes with a synced spatial index.
#[derive(Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
    index: SpatialIndex,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing nodes, bulk-loading the spatial index.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let index = SpatialIndex::from_nodes(nodes.iter());
        Self { nodes, index }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Append a node, returning its index.
    pub fn push(&mut self, node: Node) -> usize {
        self.index.insert(&node);
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Insert a node at a specific position (clamped to the valid range).
    pub fn insert(&mut self, index: usize, node: Node) {
        self.index.insert(&node);
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
    }

    /// Remove a node by id, returning it with the index it occupied.
    pub fn remove(&mut self, id: NodeId) -> Option<(Node, usize)> {
        let index = self.index_of(id)?;
        self.index.remove(id);
        Some((self.nodes.remove(index), index))
    }

    /// Remove the node at a known index.
    pub fn remove_at(&mut self, index: usize) -> Option<Node> {
        if index >= self.nodes.len() {
            return None;
        }
        let node = self.nodes.remove(index);
        self.index.remove(node.id);
        Some(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    /// Refresh the spatial index entry for a node whose geometry changed.
    pub fn update_spatial_index(&mut self, id: NodeId) {
        if let Some(node) = self.nodes.iter().find(|n| n.id == id) {
            self.index.insert(node);
        }
    }

    /// Nodes in paint order: stable sort by `z` ascending, so ties keep
    /// insertion order.
    pub fn sorted_by_z(&self) -> Vec<&Node> {
        let mut sorted: Vec<&Node> = self.nodes.iter().collect();
        sorted.sort_by(|a, b| a.z.total_cmp(&b.z));
        sorted
    }

    /// Highest z among current nodes, or 0 for an empty store.
    pub fn max_z(&self) -> f32 {
        self.nodes.iter().map(|n| n.z).fold(0.0, f32::max)
    }

    /// Ids of nodes whose bounds contain the point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<NodeId> {
        self.index.query_point(x, y)
    }

    /// Ids of nodes whose bounds intersect the rectangle's envelope
    /// (touching counts; callers refine with exact tests).
    pub fn query_rect(&self, rect: Rect) -> Vec<NodeId> {
        self.index.query_rect(rect)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }
}
