//! Gesture state machine - unified state for all viewport interactions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning            (pointer down / qualifying single touch)
//! Idle -> Pinching           (second touch point appears)
//! Panning -> Inertia         (release with enough velocity)
//! Panning -> Idle            (release below click threshold -> click)
//! Pinching -> Panning        (touch count drops to one)
//! Idle -> ScalingAnimation   (wheel or programmatic zoom)
//! Any animation -> Idle      (engine reports natural settlement)
//! ```

use crate::constants::VELOCITY_SAMPLES;
use crate::geometry::Point;
use crate::physics::Velocity;

/// Transient state of an active drag.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    /// True while the drag is in progress
    pub happens: bool,
    pub start_x: f32,
    pub start_y: f32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(x: f32, y: f32) -> Self {
        Self {
            happens: true,
            start_x: x,
            start_y: y,
            last_x: x,
            last_y: y,
        }
    }
}

/// Reference frame of a two-touch gesture, captured at pinch start.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchState {
    /// Distance between the two touches at pinch start
    pub distance: f32,
    /// Live ratio of current distance to initial distance
    pub scale: f32,
    pub center_x: f32,
    pub center_y: f32,
    /// View pan position at pinch start
    pub offset_x: f32,
    pub offset_y: f32,
}

/// The screen-space point held visually fixed while scale changes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ZoomAnchor {
    pub x: f32,
    pub y: f32,
}

/// Unified interaction state for the viewport.
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    /// No active gesture or animation
    #[default]
    Idle,

    /// Mouse or single-touch drag active
    Panning {
        drag: DragState,
        /// Rolling buffer of recent positions for release-velocity estimation
        samples: Vec<Point>,
        /// Pointer or touch id driving the pan
        pointer: u64,
    },

    /// Two-touch gesture active
    Pinching {
        pinch: PinchState,
        /// Spring scale at pinch start; requested = ref_scale * pinch.scale
        ref_scale: f32,
    },

    /// Spring running with no active touch
    ScalingAnimation,

    /// Velocity decaying with no active touch
    InertiaAnimation,
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }

    pub fn is_animating(&self) -> bool {
        matches!(self, Self::ScalingAnimation | Self::InertiaAnimation)
    }

    /// Reset to Idle.
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}

/// Push a position into the rolling sample buffer, keeping it short.
pub(crate) fn push_sample(samples: &mut Vec<Point>, point: Point) {
    if samples.len() >= VELOCITY_SAMPLES {
        samples.remove(0);
    }
    samples.push(point);
}

/// Estimate release velocity from the recorded positions.
///
/// A simple finite difference over the last three samples,
/// `(pos[n] - pos[n-2]) / 2`, falling back to the last pair.
pub(crate) fn estimate_velocity(samples: &[Point]) -> Velocity {
    match samples.len() {
        0 | 1 => Velocity::default(),
        2 => Velocity::new(
            samples[1].x - samples[0].x,
            samples[1].y - samples[0].y,
        ),
        n => Velocity::new(
            (samples[n - 1].x - samples[n - 3].x) / 2.0,
            (samples[n - 1].y - samples[n - 3].y) / 2.0,
        ),
    }
}
