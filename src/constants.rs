//! Engine-wide constants.
//!
//! Centralizes magic numbers and physics defaults to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Physics
// ============================================================================

/// Per-tick friction multiplier for pan inertia
pub const DEFAULT_FRICTION: f32 = 0.92;

/// Spring stiffness for the scale animation
pub const DEFAULT_STIFFNESS: f32 = 0.15;

/// Spring damping for the scale animation
pub const DEFAULT_DAMPING: f32 = 0.8;

/// Settlement epsilon for inertia and spring animations.
/// Below this, an animation is considered finished and stops scheduling ticks.
pub const SETTLE_EPSILON: f32 = 1e-4;

/// Minimum release speed (px/frame) for a drag to fling into inertia
pub const MIN_FLING_SPEED: f32 = 0.5;

/// Number of recent pointer positions kept for release-velocity estimation
pub const VELOCITY_SAMPLES: usize = 5;

// ============================================================================
// Zoom & Scale
// ============================================================================

/// Hard floor for the view scale; guards division in coordinate conversion
pub const MIN_SCALE_FLOOR: f32 = 1e-3;

/// Rubber-band curve exponent for out-of-bounds scale requests
pub const DEFAULT_RUBBER_EXPONENT: f32 = 0.25;

/// Rubber-band curve stretch for out-of-bounds scale requests
pub const DEFAULT_RUBBER_STRETCH: f32 = 0.5;

/// Wheel pixel-delta divisor for the zoom step
pub const WHEEL_PIXEL_DIVISOR: f32 = 500.0;

/// Wheel line-delta divisor for the zoom step
pub const WHEEL_LINE_DIVISOR: f32 = 50.0;

/// Wheel steps below this factor are ignored as noise
pub const MIN_WHEEL_FACTOR: f32 = 0.001;

/// Default wheel speed multiplier
pub const DEFAULT_WHEEL_SPEED: f32 = 1.0;

/// Default multiplier applied to momentum-phase wheel events
pub const DEFAULT_WHEEL_MOMENTUM_FACTOR: f32 = 0.4;

// ============================================================================
// Input
// ============================================================================

/// Maximum press-to-release displacement (px) for a gesture to count as a click
pub const DEFAULT_CLICK_THRESHOLD: f32 = 4.0;

// ============================================================================
// Document
// ============================================================================

/// Minimum node width and height enforced after any resize
pub const MIN_NODE_SIZE: f32 = 20.0;

/// Maximum undo history entries to keep
pub const MAX_HISTORY: usize = 50;
