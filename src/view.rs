//! The view transform and coordinate conversion.
//!
//! Centralized conversion between screen space (pixels of the viewing
//! surface) and board space (the document's own coordinates), so the
//! formulas are not duplicated across input handling code.

use serde::{Deserialize, Serialize};

use crate::constants::MIN_SCALE_FLOOR;
use crate::geometry::Point;

/// Pan position and scale of the view.
///
/// Owned by the gesture coordinator; the render layer reads snapshots.
/// `scale` never reaches zero; conversions apply a positive floor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    pub fn new(x: f32, y: f32, scale: f32) -> Self {
        Self {
            x,
            y,
            scale: scale.max(MIN_SCALE_FLOOR),
        }
    }

    /// Effective scale with the division-by-zero guard applied.
    #[inline]
    pub fn safe_scale(&self) -> f32 {
        self.scale.max(MIN_SCALE_FLOOR)
    }

    /// Convert a screen position to board space.
    #[inline]
    pub fn screen_to_board(&self, pos: Point) -> Point {
        let s = self.safe_scale();
        Point::new((pos.x - self.x) / s, (pos.y - self.y) / s)
    }

    /// Convert a board position to screen space.
    #[inline]
    pub fn board_to_screen(&self, pos: Point) -> Point {
        Point::new(pos.x * self.scale + self.x, pos.y * self.scale + self.y)
    }

    /// Convert a screen-space delta to board space (for drag operations).
    #[inline]
    pub fn delta_screen_to_board(&self, delta: Point) -> Point {
        let s = self.safe_scale();
        Point::new(delta.x / s, delta.y / s)
    }

    /// Convert a board-space delta to screen space.
    #[inline]
    pub fn delta_board_to_screen(&self, delta: Point) -> Point {
        Point::new(delta.x * self.scale, delta.y * self.scale)
    }
}
