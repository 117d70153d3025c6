//! Headless interaction engine for an infinite canvas.
//!
//! The crate has two halves that meet at the node store:
//!
//! - the **viewport** half turns raw pointer, touch, and wheel input into a
//!   view transform, with inertial panning and spring-settled zoom driven
//!   through an injected frame scheduler
//! - the **document** half holds the flat node list with a spatial index,
//!   selection and hit testing, and undoable commands over it
//!
//! Nothing here renders or talks to a windowing system. A host feeds input
//! events in, grants animation frames back via [`input::Viewport::on_frame`],
//! and reads the resulting [`view::ViewTransform`] and node set each frame.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod history;
pub mod input;
pub mod node;
pub mod physics;
pub mod scheduler;
pub mod selection;
pub mod spatial_index;
pub mod store;
pub mod view;

pub use commands::{Corner, CreateNode, DeleteNodes, GroupNodes, MoveNodes, ResizeNodes};
pub use config::{RubberParams, ScaleBounds, ViewportConfig, WheelConfig};
pub use error::{ConfigError, ConfigResult};
pub use geometry::{Point, Rect};
pub use history::{Command, History};
pub use input::{TouchPoint, Viewport, ViewportEvent, WheelInput};
pub use node::{Node, NodeContent, NodeId};
pub use scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
pub use selection::{hit_test, Selection};
pub use store::NodeStore;
pub use view::ViewTransform;
