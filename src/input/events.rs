//! Abstract input events consumed by the viewport.
//!
//! These mirror what a DOM or windowing host produces without depending on
//! either: the host translates its native events into these and forwards
//! them.

/// One active touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
    pub id: u64,
}

impl TouchPoint {
    pub fn new(x: f32, y: f32, id: u64) -> Self {
        Self { x, y, id }
    }
}

/// Unit of a wheel event's delta values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixels,
    Lines,
}

/// A wheel event with the cursor position it occurred at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    pub delta_x: f32,
    pub delta_y: f32,
    pub mode: WheelDeltaMode,
    pub cursor_x: f32,
    pub cursor_y: f32,
    /// True for momentum-phase (coasting trackpad) wheel events
    pub momentum: bool,
}

impl WheelInput {
    pub fn pixels(delta_x: f32, delta_y: f32, cursor_x: f32, cursor_y: f32) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: WheelDeltaMode::Pixels,
            cursor_x,
            cursor_y,
            momentum: false,
        }
    }

    pub fn lines(delta_x: f32, delta_y: f32, cursor_x: f32, cursor_y: f32) -> Self {
        Self {
            delta_x,
            delta_y,
            mode: WheelDeltaMode::Lines,
            cursor_x,
            cursor_y,
            momentum: false,
        }
    }
}
