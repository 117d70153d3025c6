//! Scale spring: drives the view scale toward a target after a zoom gesture.

use tracing::trace;

use crate::constants::{MIN_SCALE_FLOOR, SETTLE_EPSILON};
use crate::scheduler::{FrameHandle, FrameScheduler};

/// Result of one spring tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringTick {
    /// Live scale after integrating velocity this frame
    pub current: f32,
    /// True when both distance-to-target and velocity fell below epsilon
    pub settled: bool,
}

/// Damped spring over the scale value.
///
/// When `frame` is clear no animation is in flight and `current == target`
/// is the settled condition the engine drives toward. Velocity is
/// integrated into `current` on every tick, not only adjusted.
#[derive(Debug)]
pub struct ScaleSpring {
    target: f32,
    current: f32,
    velocity: f32,
    stiffness: f32,
    damping: f32,
    pub(crate) frame: Option<FrameHandle>,
}

impl ScaleSpring {
    pub fn new(initial: f32, stiffness: f32, damping: f32) -> Self {
        let initial = initial.max(MIN_SCALE_FLOOR);
        Self {
            target: initial,
            current: initial,
            velocity: 0.0,
            stiffness,
            damping,
            frame: None,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_active(&self) -> bool {
        self.frame.is_some()
    }

    pub fn owns(&self, handle: FrameHandle) -> bool {
        self.frame == Some(handle)
    }

    /// Update the desired scale. The caller (re)starts the spring if idle.
    pub fn set_target(&mut self, value: f32) {
        self.target = value;
    }

    /// Whether target distance or residual velocity still warrant animation.
    pub fn needs_animation(&self) -> bool {
        (self.target - self.current).abs() > SETTLE_EPSILON
            || self.velocity.abs() > SETTLE_EPSILON
    }

    /// Begin animating, cancelling any previous frame handle first.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        trace!(target = self.target, current = self.current, "spring start");
        self.frame = Some(scheduler.request_frame());
    }

    /// Cancel the frame handle and zero velocity without snapping to target.
    ///
    /// Used to abort mid-gesture.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        self.velocity = 0.0;
    }

    /// Force both current and target to a value, at rest.
    pub fn snap(&mut self, value: f32) {
        self.target = value;
        self.current = value;
        self.velocity = 0.0;
    }

    /// Advance the spring one frame.
    ///
    /// On settlement, current snaps to target, velocity zeroes, and the
    /// frame handle clears; the caller must not reschedule.
    pub fn tick(&mut self) -> SpringTick {
        let diff = self.target - self.current;
        self.velocity += diff * self.stiffness;
        self.velocity *= self.damping;
        self.current += self.velocity;

        // The scale must never reach zero: an underdamped overshoot below
        // a small target is arrested at the floor instead of propagated.
        if self.current < MIN_SCALE_FLOOR {
            self.current = MIN_SCALE_FLOOR;
            self.velocity = 0.0;
        }

        let settled = (self.target - self.current).abs() < SETTLE_EPSILON
            && self.velocity.abs() < SETTLE_EPSILON;

        if settled {
            self.current = self.target;
            self.velocity = 0.0;
            self.frame = None;
            trace!(scale = self.current, "spring settled");
        }

        SpringTick {
            current: self.current,
            settled,
        }
    }
}
