//! The gesture coordinator.
//!
//! `Viewport` consumes raw pointer, touch, and wheel input, owns the view
//! transform and both physics engines, and decides when animations start
//! and stop. Hosts observe changes through a subscriber callback and read
//! the view transform as a snapshot each frame.

use tracing::debug;

use crate::config::ViewportConfig;
use crate::constants::{
    MIN_FLING_SPEED, MIN_SCALE_FLOOR, MIN_WHEEL_FACTOR, WHEEL_LINE_DIVISOR, WHEEL_PIXEL_DIVISOR,
};
use crate::error::ConfigResult;
use crate::geometry::{apply_scale_bounding, clamp, is_click, Point};
use crate::input::events::{TouchPoint, WheelDeltaMode, WheelInput};
use crate::input::state::{
    estimate_velocity, push_sample, DragState, GestureState, PinchState, ZoomAnchor,
};
use crate::physics::{InertiaEngine, ScaleSpring};
use crate::scheduler::{FrameHandle, FrameScheduler};
use crate::view::ViewTransform;

/// Events the viewport emits to its host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    PanStart { x: f32, y: f32 },
    PanMove { dx: f32, dy: f32 },
    PanEnd,
    /// Press and release stayed within the click threshold; fired instead
    /// of `PanEnd`
    Click { x: f32, y: f32 },
    InertiaTick { dx: f32, dy: f32 },
    InertiaEnd,
    ScaleTick { scale: f32 },
    ScaleEnd { scale: f32 },
    /// Raw wheel input, forwarded before any zoom handling
    WheelRaw { delta_x: f32, delta_y: f32 },
}

type Observer = Box<dyn FnMut(ViewportEvent)>;

/// Gesture coordinator owning the view transform and physics engines.
pub struct Viewport {
    view: ViewTransform,
    state: GestureState,
    anchor: ZoomAnchor,
    inertia: InertiaEngine,
    spring: ScaleSpring,
    config: ViewportConfig,
    scheduler: Box<dyn FrameScheduler>,
    observer: Option<Observer>,
}

impl Viewport {
    /// Build a viewport from a validated configuration and an injected
    /// frame scheduler.
    pub fn new(config: ViewportConfig, scheduler: Box<dyn FrameScheduler>) -> ConfigResult<Self> {
        config.validate()?;
        let view = ViewTransform::new(config.x, config.y, config.scale);
        Ok(Self {
            view,
            state: GestureState::default(),
            anchor: ZoomAnchor::default(),
            inertia: InertiaEngine::new(config.friction),
            spring: ScaleSpring::new(view.scale, config.stiffness, config.damping),
            config,
            scheduler,
            observer: None,
        })
    }

    /// Register the host's event observer, replacing any previous one.
    pub fn subscribe(&mut self, observer: impl FnMut(ViewportEvent) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Read-only snapshot of the current view transform.
    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn anchor(&self) -> ZoomAnchor {
        self.anchor
    }

    /// The scale the spring is currently driving toward.
    pub fn scale_target(&self) -> f32 {
        self.spring.target()
    }

    // ------------------------------------------------------------------
    // Pointer (mouse) input
    // ------------------------------------------------------------------

    pub fn handle_pointer_down(&mut self, x: f32, y: f32, pointer_id: u64) {
        if !self.config.mouse_pan || self.state.is_pinching() {
            return;
        }
        self.begin_pan(x, y, pointer_id);
    }

    pub fn handle_pointer_move(&mut self, x: f32, y: f32, pointer_id: u64) {
        self.pan_move(x, y, pointer_id);
    }

    pub fn handle_pointer_up(&mut self, x: f32, y: f32, pointer_id: u64) {
        if let GestureState::Panning { pointer, .. } = &self.state {
            if *pointer == pointer_id {
                self.end_pan(x, y);
            }
        }
    }

    // ------------------------------------------------------------------
    // Touch input
    // ------------------------------------------------------------------

    pub fn handle_touch_start(&mut self, touches: &[TouchPoint]) {
        if touches.len() >= 2 && self.config.double_touch_pan {
            self.begin_pinch(touches);
        } else if touches.len() == 1 && self.config.single_touch_pan {
            let t = touches[0];
            self.begin_pan(t.x, t.y, t.id);
        }
    }

    pub fn handle_touch_move(&mut self, touches: &[TouchPoint]) {
        if self.state.is_pinching() {
            if touches.len() >= 2 {
                self.pinch_move(touches);
            } else {
                // Malformed input while pinching: downgrade, don't fail
                self.downgrade_pinch(touches);
            }
            return;
        }
        if self.state.is_panning() {
            if touches.len() >= 2 && self.config.double_touch_pan {
                self.begin_pinch(touches);
            } else if let Some(t) = touches.first() {
                self.pan_move(t.x, t.y, t.id);
            }
            return;
        }
        // A move without a matching start: adopt a qualifying pinch
        if touches.len() >= 2 && self.config.double_touch_pan {
            self.begin_pinch(touches);
        }
    }

    /// Handle touch release; `remaining` is the set of still-active touches.
    pub fn handle_touch_end(&mut self, remaining: &[TouchPoint]) {
        match remaining.len() {
            0 => {
                if let GestureState::Panning { drag, .. } = &self.state {
                    let (x, y) = (drag.last_x, drag.last_y);
                    self.end_pan(x, y);
                } else if self.state.is_pinching() {
                    self.state.reset();
                }
            }
            1 if self.state.is_pinching() => self.downgrade_pinch(remaining),
            _ => {}
        }
    }

    // ------------------------------------------------------------------
    // Wheel input
    // ------------------------------------------------------------------

    pub fn handle_wheel(&mut self, input: &WheelInput) {
        self.emit(ViewportEvent::WheelRaw {
            delta_x: input.delta_x,
            delta_y: input.delta_y,
        });
        if self.state.is_pinching() {
            return;
        }

        let mut dy = input.delta_y;
        if input.momentum {
            dy *= self.config.wheel.momentum_factor;
        }
        let factor = match input.mode {
            WheelDeltaMode::Pixels => -dy / WHEEL_PIXEL_DIVISOR,
            WheelDeltaMode::Lines => -dy / WHEEL_LINE_DIVISOR,
        } * self.config.wheel.speed;
        if factor.abs() <= MIN_WHEEL_FACTOR {
            return;
        }

        self.anchor = ZoomAnchor {
            x: input.cursor_x,
            y: input.cursor_y,
        };
        // Multiplicative step keeps zoom speed consistent across scales
        let requested = self.spring.target() * (1.0 + factor);
        let bounded = self.bound_scale(requested);
        self.spring.set_target(bounded);
        if !self.spring.is_active() {
            self.spring.start(&mut *self.scheduler);
        }
        self.enter_scaling_animation();
    }

    // ------------------------------------------------------------------
    // Programmatic zoom
    // ------------------------------------------------------------------

    /// Animate the scale to `value`, hard-clamped to the configured bounds.
    ///
    /// Cancels any in-flight spring animation before establishing the new
    /// target.
    pub fn set_scale(&mut self, value: f32) {
        self.spring.stop(&mut *self.scheduler);
        let min = self
            .config
            .scale_bounds
            .min
            .unwrap_or(MIN_SCALE_FLOOR)
            .max(MIN_SCALE_FLOOR);
        let max = self.config.scale_bounds.max.unwrap_or(f32::INFINITY);
        self.spring.set_target(clamp(value, min, max));
        if self.spring.needs_animation() {
            self.spring.start(&mut *self.scheduler);
            self.enter_scaling_animation();
        }
    }

    /// Zoom by `factor` keeping the screen point `(x, y)` visually fixed.
    pub fn zoom_around(&mut self, factor: f32, x: f32, y: f32) {
        self.anchor = ZoomAnchor { x, y };
        let target = self.spring.target() * factor;
        self.set_scale(target);
    }

    // ------------------------------------------------------------------
    // Frame driving
    // ------------------------------------------------------------------

    /// Advance whichever animation owns the granted frame.
    ///
    /// Handles from cancelled animations are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.inertia.owns(handle) {
            let step = self.inertia.tick();
            self.view.x += step.dx;
            self.view.y += step.dy;
            self.emit(ViewportEvent::InertiaTick {
                dx: step.dx,
                dy: step.dy,
            });
            if step.settled {
                self.emit(ViewportEvent::InertiaEnd);
                if matches!(self.state, GestureState::InertiaAnimation) {
                    // A spring begun mid-coast (wheel zoom) takes over the state
                    self.state = if self.spring.is_active() {
                        GestureState::ScalingAnimation
                    } else {
                        GestureState::Idle
                    };
                }
            } else {
                self.inertia.frame = Some(self.scheduler.request_frame());
            }
            return;
        }

        if self.spring.owns(handle) {
            let before = self.spring.current();
            let step = self.spring.tick();
            self.apply_scale_step(before, step.current);
            self.view.scale = step.current.max(MIN_SCALE_FLOOR);
            self.emit(ViewportEvent::ScaleTick {
                scale: step.current,
            });
            if step.settled {
                self.emit(ViewportEvent::ScaleEnd {
                    scale: self.spring.current(),
                });
                if matches!(self.state, GestureState::ScalingAnimation) {
                    self.state.reset();
                }
            } else {
                self.spring.frame = Some(self.scheduler.request_frame());
            }
        }
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn begin_pan(&mut self, x: f32, y: f32, pointer: u64) {
        // A new gesture interrupts inertia: cancel, don't just overwrite
        self.inertia.cancel(&mut *self.scheduler);
        self.inertia.reset();
        debug!(x, y, "pan start");
        self.state = GestureState::Panning {
            drag: DragState::begin(x, y),
            samples: vec![Point::new(x, y)],
            pointer,
        };
        self.emit(ViewportEvent::PanStart { x, y });
    }

    fn pan_move(&mut self, x: f32, y: f32, id: u64) {
        let delta = match &mut self.state {
            GestureState::Panning {
                drag,
                samples,
                pointer,
            } if *pointer == id => {
                let dx = x - drag.last_x;
                let dy = y - drag.last_y;
                drag.last_x = x;
                drag.last_y = y;
                push_sample(samples, Point::new(x, y));
                Some((dx, dy))
            }
            _ => None,
        };
        if let Some((dx, dy)) = delta {
            // Pan is 1:1 with pointer movement, independent of zoom level
            self.view.x += dx;
            self.view.y += dy;
            self.emit(ViewportEvent::PanMove { dx, dy });
        }
    }

    fn end_pan(&mut self, x: f32, y: f32) {
        let GestureState::Panning { drag, samples, .. } = std::mem::take(&mut self.state) else {
            return;
        };
        let start = Point::new(drag.start_x, drag.start_y);
        if is_click(start, Point::new(x, y), self.config.click_threshold) {
            debug!(x, y, "gesture reclassified as click");
            self.emit(ViewportEvent::Click { x, y });
            return;
        }
        self.emit(ViewportEvent::PanEnd);

        let velocity = estimate_velocity(&samples);
        if velocity.speed() > MIN_FLING_SPEED {
            debug!(vx = velocity.x, vy = velocity.y, "pan released into inertia");
            self.inertia.set_velocity(velocity);
            self.inertia.start(&mut *self.scheduler);
            self.state = GestureState::InertiaAnimation;
        }
    }

    fn begin_pinch(&mut self, touches: &[TouchPoint]) {
        let (a, b) = (touches[0], touches[1]);
        let distance = (b.x - a.x).hypot(b.y - a.y);
        // Guard the later distance ratio against a degenerate pinch
        if distance <= f32::EPSILON {
            return;
        }
        self.inertia.cancel(&mut *self.scheduler);

        let center_x = (a.x + b.x) / 2.0;
        let center_y = (a.y + b.y) / 2.0;
        // Preserve the anchor if a spring is mid-flight to avoid a jump
        if !self.spring.is_active() {
            self.anchor = ZoomAnchor {
                x: center_x,
                y: center_y,
            };
        }
        debug!(distance, center_x, center_y, "pinch start");
        self.state = GestureState::Pinching {
            pinch: PinchState {
                distance,
                scale: 1.0,
                center_x,
                center_y,
                offset_x: self.view.x,
                offset_y: self.view.y,
            },
            ref_scale: self.spring.current().max(MIN_SCALE_FLOOR),
        };
    }

    fn pinch_move(&mut self, touches: &[TouchPoint]) {
        let (a, b) = (touches[0], touches[1]);
        let live = (b.x - a.x).hypot(b.y - a.y);
        let requested = match &mut self.state {
            GestureState::Pinching { pinch, ref_scale } if pinch.distance > 0.0 => {
                let ratio = live / pinch.distance;
                pinch.scale = ratio;
                Some(*ref_scale * ratio)
            }
            _ => None,
        };
        let Some(requested) = requested else { return };
        let bounded = self.bound_scale(requested);
        self.spring.set_target(bounded);
        if !self.spring.is_active() {
            self.spring.start(&mut *self.scheduler);
        }
    }

    fn downgrade_pinch(&mut self, touches: &[TouchPoint]) {
        match touches.first().copied() {
            Some(t) if self.config.single_touch_pan => self.begin_pan(t.x, t.y, t.id),
            _ => self.state.reset(),
        }
    }

    /// Recompute the pan so the zoom anchor stays visually fixed while the
    /// spring moves the scale from `before` to `current`.
    fn apply_scale_step(&mut self, before: f32, current: f32) {
        match &self.state {
            GestureState::Pinching { pinch, ref_scale } => {
                let ratio = current / ref_scale.max(MIN_SCALE_FLOOR);
                self.view.x = self.anchor.x - (self.anchor.x - pinch.offset_x) * ratio;
                self.view.y = self.anchor.y - (self.anchor.y - pinch.offset_y) * ratio;
            }
            _ => {
                let ratio = current / before.max(MIN_SCALE_FLOOR);
                self.view.x = self.anchor.x - (self.anchor.x - self.view.x) * ratio;
                self.view.y = self.anchor.y - (self.anchor.y - self.view.y) * ratio;
            }
        }
    }

    /// Mark the state as scale-animating unless a gesture or live inertia
    /// still owns it.
    fn enter_scaling_animation(&mut self) {
        let stale_inertia =
            matches!(self.state, GestureState::InertiaAnimation) && !self.inertia.is_active();
        if self.state.is_idle() || stale_inertia {
            self.state = GestureState::ScalingAnimation;
        }
    }

    fn bound_scale(&self, requested: f32) -> f32 {
        apply_scale_bounding(
            requested,
            &self.config.scale_bounds,
            &self.config.lower_rubber,
            &self.config.upper_rubber,
        )
        .max(MIN_SCALE_FLOOR)
    }

    fn emit(&mut self, event: ViewportEvent) {
        if let Some(observer) = self.observer.as_mut() {
            observer(event);
        }
    }
}
