//! Core node types for the board document.
//!
//! Nodes are flat records with position, size, and paint order, plus a
//! serde-tagged content union. The whole model serializes as the flat list
//! of tagged records a host needs for persistence.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::Rect;

/// Unique, immutable node identifier.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Outline styling shared by boxed node kinds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub color: String,
    pub width: f32,
}

/// Background/foreground/outline styling for text and group nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxStyles {
    pub bg: String,
    pub fg: String,
    pub outline: Outline,
}

impl Default for BoxStyles {
    fn default() -> Self {
        Self {
            bg: "#f0f0f0".to_string(),
            fg: "#000".to_string(),
            outline: Outline {
                color: "#999".to_string(),
                width: 1.0,
            },
        }
    }
}

/// Brush kind for sketch strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brush {
    Pen,
    Marker,
    Pencil,
}

/// Stroke styling for sketch nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SketchStyles {
    pub color: String,
    pub width: f32,
    pub brush: Brush,
}

impl Default for SketchStyles {
    fn default() -> Self {
        Self {
            color: "#000".to_string(),
            width: 2.0,
            brush: Brush::Pen,
        }
    }
}

/// Variant-specific payload of a node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeContent {
    /// Text with box styling
    Textable { content: String, styles: BoxStyles },
    /// Vector path with brush styling
    Sketch { path: String, styles: SketchStyles },
    /// Grouped nodes: children are value copies captured at group time;
    /// the originals leave the flat store
    Group {
        title: String,
        children: Vec<Node>,
        styles: BoxStyles,
    },
}

/// A positioned shape on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Position and size in board space
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    /// Paint order; sorted ascending, not necessarily contiguous
    pub z: f32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub visible: Option<bool>,
    /// Back-reference to the parent group, set only on group children
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub group: Option<NodeId>,
    #[serde(flatten)]
    pub content: NodeContent,
}

impl Node {
    /// A text node with default styling.
    pub fn textable(x: f32, y: f32, w: f32, h: f32, z: f32, content: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            x,
            y,
            w,
            h,
            z,
            locked: None,
            visible: None,
            group: None,
            content: NodeContent::Textable {
                content: content.into(),
                styles: BoxStyles::default(),
            },
        }
    }

    /// A sketch node with default brush styling.
    pub fn sketch(x: f32, y: f32, w: f32, h: f32, z: f32, path: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            x,
            y,
            w,
            h,
            z,
            locked: None,
            visible: None,
            group: None,
            content: NodeContent::Sketch {
                path: path.into(),
                styles: SketchStyles::default(),
            },
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        self.bounds().contains_point(x, y)
    }

    pub fn is_group(&self) -> bool {
        matches!(self.content, NodeContent::Group { .. })
    }
}
