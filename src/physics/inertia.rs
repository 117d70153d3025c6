//! Pan inertia: a decaying 2D velocity applied after a drag release.

use tracing::trace;

use crate::constants::SETTLE_EPSILON;
use crate::scheduler::{FrameHandle, FrameScheduler};

/// 2D velocity in screen pixels per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn speed(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// Result of one inertia tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InertiaTick {
    /// Pan delta to apply this frame
    pub dx: f32,
    pub dy: f32,
    /// True when both components fell below the settlement epsilon
    pub settled: bool,
}

/// Decaying-velocity engine for post-drag panning.
///
/// The frame handle is present only while inertia is active; it is the
/// single owner of the animation loop, so restarting always cancels the
/// previous handle first.
#[derive(Debug)]
pub struct InertiaEngine {
    velocity: Velocity,
    friction: f32,
    pub(crate) frame: Option<FrameHandle>,
}

impl InertiaEngine {
    pub fn new(friction: f32) -> Self {
        Self {
            velocity: Velocity::default(),
            friction,
            frame: None,
        }
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Reset velocity to zero (drag start).
    pub fn reset(&mut self) {
        self.velocity = Velocity::default();
    }

    pub fn is_active(&self) -> bool {
        self.frame.is_some()
    }

    pub fn owns(&self, handle: FrameHandle) -> bool {
        self.frame == Some(handle)
    }

    /// Begin the per-frame decay using the current velocity.
    ///
    /// Re-entrant: an already running animation is cancelled first so two
    /// loops never fight over the same state.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        trace!(vx = self.velocity.x, vy = self.velocity.y, "inertia start");
        self.frame = Some(scheduler.request_frame());
    }

    /// Stop the animation immediately without zeroing velocity.
    ///
    /// Used when a new gesture interrupts inertia mid-flight.
    pub fn cancel(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
    }

    /// Decay the velocity once and report the per-tick pan delta.
    ///
    /// On settlement the velocity is force-set to exactly zero and the
    /// frame handle is cleared; the caller must not reschedule.
    pub fn tick(&mut self) -> InertiaTick {
        self.velocity.x *= self.friction;
        self.velocity.y *= self.friction;

        let dx = self.velocity.x;
        let dy = self.velocity.y;
        let settled = dx.abs() <= SETTLE_EPSILON && dy.abs() <= SETTLE_EPSILON;

        if settled {
            self.velocity = Velocity::default();
            self.frame = None;
            trace!("inertia settled");
        }

        InertiaTick { dx, dy, settled }
    }
}
