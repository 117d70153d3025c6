//! Selection set and hit-testing over the node store.
//!
//! The selection holds node ids only, never node copies. Stale ids
//! (pointing at removed nodes) are tolerated; consumers filter against the
//! live store via [`Selection::retain_live`] or
//! [`Selection::selected_nodes`].

use crate::geometry::Rect;
use crate::node::{Node, NodeId};
use crate::store::NodeStore;

/// Topmost node containing the point, or `None`.
///
/// Topmost means highest `z`; among equal-z candidates the later insertion
/// wins.
pub fn hit_test(store: &NodeStore, x: f32, y: f32) -> Option<NodeId> {
    store
        .query_point(x, y)
        .into_iter()
        .filter_map(|id| {
            let index = store.index_of(id)?;
            let node = store.get(id)?;
            Some((node.z, index, id))
        })
        .max_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
        .map(|(_, _, id)| id)
}

/// The current selection: a duplicate-free id list preserving insertion
/// order (the first id is the primary selection).
#[derive(Default, Debug, Clone)]
pub struct Selection {
    ids: Vec<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[NodeId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Add ids to the selection; without `append` the prior selection is
    /// replaced. Duplicates are skipped.
    pub fn set(&mut self, ids: &[NodeId], append: bool) {
        if !append {
            self.ids.clear();
        }
        for &id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Toggle one id's membership; without `append` the selection collapses
    /// to just this id first.
    pub fn toggle(&mut self, id: NodeId, append: bool) {
        if !append {
            self.ids.clear();
        }
        match self.ids.iter().position(|&i| i == id) {
            Some(pos) => {
                self.ids.remove(pos);
            }
            None => self.ids.push(id),
        }
    }

    /// Select nodes addressed by a rectangle.
    ///
    /// With `partial`, any node whose bounds openly intersect the rectangle
    /// is selected; otherwise only nodes fully contained. Nodes join the
    /// selection in paint order.
    pub fn select_in_rect(&mut self, store: &NodeStore, rect: Rect, append: bool, partial: bool) {
        if !append {
            self.ids.clear();
        }
        let candidates = store.query_rect(rect);
        let mut matched: Vec<(f32, usize, NodeId)> = candidates
            .into_iter()
            .filter_map(|id| {
                let node = store.get(id)?;
                let bounds = node.bounds();
                let hit = if partial {
                    bounds.intersects_open(&rect)
                } else {
                    rect.contains_rect(&bounds)
                };
                hit.then(|| (node.z, store.index_of(id).unwrap_or(usize::MAX), id))
            })
            .collect();
        matched.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        for (_, _, id) in matched {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Drop ids that no longer reference a node in the store.
    pub fn retain_live(&mut self, store: &NodeStore) {
        self.ids.retain(|&id| store.contains(id));
    }

    /// Live nodes for the selected ids, skipping stale entries.
    pub fn selected_nodes<'a>(&'a self, store: &'a NodeStore) -> impl Iterator<Item = &'a Node> {
        self.ids.iter().filter_map(|&id| store.get(id))
    }
}
