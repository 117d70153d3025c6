//! Concrete document commands.
//!
//! Each command captures its reversal state inside `execute`, so redo can
//! simply re-execute. Commands that remove nodes record `(node, index)`
//! pairs and reinsert them in reverse capture order on undo, which restores
//! the original node order even for non-adjacent removals.

use crate::constants::MIN_NODE_SIZE;
use crate::history::Command;
use crate::node::{BoxStyles, Node, NodeContent, NodeId};
use crate::store::NodeStore;

/// Append a node to the document.
pub struct CreateNode {
    node: Node,
    index: Option<usize>,
}

impl CreateNode {
    pub fn new(node: Node) -> Self {
        Self { node, index: None }
    }

    pub fn node_id(&self) -> NodeId {
        self.node.id
    }
}

impl Command for CreateNode {
    fn name(&self) -> &'static str {
        "create_node"
    }

    fn execute(&mut self, store: &mut NodeStore) {
        self.index = Some(store.push(self.node.clone()));
    }

    fn undo(&mut self, store: &mut NodeStore) {
        if let Some(index) = self.index.take() {
            store.remove_at(index);
        }
    }
}

/// Remove a batch of nodes by id. Ids with no matching node are skipped.
pub struct DeleteNodes {
    ids: Vec<NodeId>,
    removed: Vec<(Node, usize)>,
}

impl DeleteNodes {
    pub fn new(ids: Vec<NodeId>) -> Self {
        Self {
            ids,
            removed: Vec::new(),
        }
    }
}

impl Command for DeleteNodes {
    fn name(&self) -> &'static str {
        "delete_nodes"
    }

    fn execute(&mut self, store: &mut NodeStore) {
        self.removed.clear();
        for &id in &self.ids {
            if let Some((node, index)) = store.remove(id) {
                self.removed.push((node, index));
            }
        }
    }

    fn undo(&mut self, store: &mut NodeStore) {
        // Reverse capture order: each captured index was taken after the
        // earlier removals shifted the list, so undoing last-to-first lands
        // every node back at its original position.
        for (node, index) in self.removed.drain(..).rev() {
            store.insert(index, node);
        }
    }
}

/// Translate a batch of nodes by a shared delta.
pub struct MoveNodes {
    ids: Vec<NodeId>,
    dx: f32,
    dy: f32,
    prev: Vec<(NodeId, f32, f32)>,
}

impl MoveNodes {
    pub fn new(ids: Vec<NodeId>, dx: f32, dy: f32) -> Self {
        Self {
            ids,
            dx,
            dy,
            prev: Vec::new(),
        }
    }
}

impl Command for MoveNodes {
    fn name(&self) -> &'static str {
        "move_nodes"
    }

    fn execute(&mut self, store: &mut NodeStore) {
        self.prev.clear();
        for &id in &self.ids {
            if let Some(node) = store.get_mut(id) {
                self.prev.push((id, node.x, node.y));
                node.x += self.dx;
                node.y += self.dy;
                store.update_spatial_index(id);
            }
        }
    }

    fn undo(&mut self, store: &mut NodeStore) {
        for &(id, x, y) in &self.prev {
            if let Some(node) = store.get_mut(id) {
                node.x = x;
                node.y = y;
                store.update_spatial_index(id);
            }
        }
    }
}

/// The resize handle being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn has_left(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::BottomLeft)
    }

    fn has_top(self) -> bool {
        matches!(self, Corner::TopLeft | Corner::TopRight)
    }

    fn has_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    fn has_bottom(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }
}

/// Resize a batch of nodes from one corner handle.
///
/// Edge rules: the left edge moves x by dx, the top moves y by dy, the
/// right adjusts w by -dx, the bottom adjusts h by -dy. Sizes clamp at the
/// 20x20 minimum rather than rejecting the resize.
pub struct ResizeNodes {
    ids: Vec<NodeId>,
    corner: Corner,
    dx: f32,
    dy: f32,
    prev: Vec<(NodeId, f32, f32, f32, f32)>,
}

impl ResizeNodes {
    pub fn new(ids: Vec<NodeId>, corner: Corner, dx: f32, dy: f32) -> Self {
        Self {
            ids,
            corner,
            dx,
            dy,
            prev: Vec::new(),
        }
    }
}

impl Command for ResizeNodes {
    fn name(&self) -> &'static str {
        "resize_nodes"
    }

    fn execute(&mut self, store: &mut NodeStore) {
        self.prev.clear();
        for &id in &self.ids {
            if let Some(node) = store.get_mut(id) {
                self.prev.push((id, node.x, node.y, node.w, node.h));
                if self.corner.has_left() {
                    node.x += self.dx;
                }
                if self.corner.has_top() {
                    node.y += self.dy;
                }
                if self.corner.has_right() {
                    node.w -= self.dx;
                }
                if self.corner.has_bottom() {
                    node.h -= self.dy;
                }
                node.w = node.w.max(MIN_NODE_SIZE);
                node.h = node.h.max(MIN_NODE_SIZE);
                store.update_spatial_index(id);
            }
        }
    }

    fn undo(&mut self, store: &mut NodeStore) {
        for &(id, x, y, w, h) in &self.prev {
            if let Some(node) = store.get_mut(id) {
                node.x = x;
                node.y = y;
                node.w = w;
                node.h = h;
                store.update_spatial_index(id);
            }
        }
    }
}

/// Collapse a batch of nodes into a new group node.
///
/// The matched nodes leave the flat store; value copies tagged with the
/// group id become the group's children. The group covers the children's
/// joint bounding box and paints above everything present at execute time.
/// Matching zero ids leaves the store untouched.
pub struct GroupNodes {
    ids: Vec<NodeId>,
    group_id: NodeId,
    title: String,
    styles: BoxStyles,
    removed: Vec<(Node, usize)>,
}

impl GroupNodes {
    pub fn new(ids: Vec<NodeId>) -> Self {
        Self {
            ids,
            group_id: NodeId::new(),
            title: "Group".to_string(),
            styles: BoxStyles::default(),
            removed: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn group_id(&self) -> NodeId {
        self.group_id
    }
}

impl Command for GroupNodes {
    fn name(&self) -> &'static str {
        "group_nodes"
    }

    fn execute(&mut self, store: &mut NodeStore) {
        self.removed.clear();
        let z = store.max_z() + 1.0;

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        let mut children = Vec::new();

        for &id in &self.ids {
            if let Some((node, index)) = store.remove(id) {
                min_x = min_x.min(node.x);
                min_y = min_y.min(node.y);
                max_x = max_x.max(node.x + node.w);
                max_y = max_y.max(node.y + node.h);
                // Pristine copy captured before tagging, so undo restores
                // the flat store bit-for-bit.
                self.removed.push((node.clone(), index));
                let mut child = node;
                child.group = Some(self.group_id);
                children.push(child);
            }
        }

        if children.is_empty() {
            return;
        }

        store.push(Node {
            id: self.group_id,
            x: min_x,
            y: min_y,
            w: max_x - min_x,
            h: max_y - min_y,
            z,
            locked: None,
            visible: None,
            group: None,
            content: NodeContent::Group {
                title: self.title.clone(),
                children,
                styles: self.styles.clone(),
            },
        });
    }

    fn undo(&mut self, store: &mut NodeStore) {
        if self.removed.is_empty() {
            return;
        }
        store.remove(self.group_id);
        for (node, index) in self.removed.drain(..).rev() {
            store.insert(index, node);
        }
    }
}
