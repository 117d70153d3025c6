//! Pointer, touch, and wheel input handling for the canvas.
//!
//! The gesture coordinator uses an explicit state machine
//! ([`GestureState`]) to track the current interaction mode, making
//! impossible states unrepresentable. Transient gesture state (drag,
//! pinch) lives apart from the animated physical state (velocity, spring)
//! so a new gesture can interrupt an animation cleanly while an animation
//! can keep running after its gesture ends.
//!
//! ## Modules
//!
//! - `events` - abstract input event types (no DOM or toolkit coupling)
//! - `state` - gesture state machine enum plus drag/pinch/anchor state
//! - `viewport` - the coordinator owning the view transform and engines

pub mod events;
mod state;
mod viewport;

pub use events::{TouchPoint, WheelDeltaMode, WheelInput};
pub use state::{DragState, GestureState, PinchState, ZoomAnchor};
pub use viewport::{Viewport, ViewportEvent};
