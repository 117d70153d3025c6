//! Geometry primitives and pure interaction math.
//!
//! Everything here is stateless: clamping, the rubber-band overflow curve,
//! scale bounding, and the click-vs-drag distance test. These run on every
//! input event, so they stay allocation-free.

use serde::{Deserialize, Serialize};

use crate::config::{RubberParams, ScaleBounds};

/// A point in either screen or board space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// An axis-aligned rectangle with position and size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from two opposite corners in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            w: (a.x - b.x).abs(),
            h: (a.y - b.y).abs(),
        }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.w
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.h
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.max_x() && y >= self.y && y <= self.max_y()
    }

    /// Open intersection test: rectangles that merely touch do not intersect.
    pub fn intersects_open(&self, other: &Rect) -> bool {
        self.x < other.max_x()
            && self.max_x() > other.x
            && self.y < other.max_y()
            && self.max_y() > other.y
    }

    /// Full containment of `other` within `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.max_x() <= self.max_x()
            && other.y >= self.y
            && other.max_y() <= self.max_y()
    }
}

/// Clamp `value` into `[min, max]`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Sub-linear resistance curve for out-of-bounds input.
///
/// `sign(over) * |over|^exponent * stretch`: resistance grows as the
/// overshoot grows, so out-of-range gestures feel stretchy rather than
/// hard-clamped. Stateless, unlike the spring that takes over once a
/// gesture ends.
pub fn rubber(over: f32, exponent: f32, stretch: f32) -> f32 {
    if over == 0.0 {
        return 0.0;
    }
    over.signum() * over.abs().powf(exponent) * stretch
}

/// Apply scale bounds with rubber-band overshoot.
///
/// Requests inside the bounds pass through untouched. Requests past a bound
/// are pulled back onto the bound plus a rubber-banded remainder.
pub fn apply_scale_bounding(
    requested: f32,
    bounds: &ScaleBounds,
    lower: &RubberParams,
    upper: &RubberParams,
) -> f32 {
    if let Some(min) = bounds.min {
        if requested < min {
            return min + rubber(requested - min, lower.exponent, lower.stretch);
        }
    }
    if let Some(max) = bounds.max {
        if requested > max {
            return max + rubber(requested - max, upper.exponent, upper.stretch);
        }
    }
    requested
}

/// Whether a press-to-release displacement is small enough to count as a click.
pub fn is_click(start: Point, end: Point, threshold: f32) -> bool {
    start.distance_to(end) <= threshold
}
