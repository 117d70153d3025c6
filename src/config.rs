//! Viewport configuration.
//!
//! All tunables are applied at construction and validated once; the engine
//! never re-reads them from the host afterwards.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CLICK_THRESHOLD, DEFAULT_DAMPING, DEFAULT_FRICTION, DEFAULT_RUBBER_EXPONENT,
    DEFAULT_RUBBER_STRETCH, DEFAULT_STIFFNESS, DEFAULT_WHEEL_MOMENTUM_FACTOR, DEFAULT_WHEEL_SPEED,
};
use crate::error::{ConfigError, ConfigResult};

/// Optional minimum and maximum for the view scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleBounds {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

/// Parameters of the rubber-band overflow curve for one direction.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RubberParams {
    pub exponent: f32,
    pub stretch: f32,
}

impl Default for RubberParams {
    fn default() -> Self {
        Self {
            exponent: DEFAULT_RUBBER_EXPONENT,
            stretch: DEFAULT_RUBBER_STRETCH,
        }
    }
}

/// Wheel input tuning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WheelConfig {
    /// Multiplier on the computed zoom step
    pub speed: f32,
    /// Multiplier applied to momentum-phase wheel events
    pub momentum_factor: f32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_WHEEL_SPEED,
            momentum_factor: DEFAULT_WHEEL_MOMENTUM_FACTOR,
        }
    }
}

/// Construction-time configuration for a [`crate::input::Viewport`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Initial pan position
    pub x: f32,
    pub y: f32,
    /// Initial scale
    pub scale: f32,
    /// Per-tick friction multiplier for pan inertia
    pub friction: f32,
    /// Scale spring stiffness
    pub stiffness: f32,
    /// Scale spring damping
    pub damping: f32,
    pub scale_bounds: ScaleBounds,
    /// Rubber curve for requests below the minimum scale
    pub lower_rubber: RubberParams,
    /// Rubber curve for requests above the maximum scale
    pub upper_rubber: RubberParams,
    pub wheel: WheelConfig,
    /// Maximum press-to-release displacement (px) still counting as a click
    pub click_threshold: f32,
    /// Whether mouse drags pan the canvas
    pub mouse_pan: bool,
    /// Whether a single touch pans the canvas
    pub single_touch_pan: bool,
    /// Whether two-touch gestures pinch-zoom the canvas
    pub double_touch_pan: bool,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            friction: DEFAULT_FRICTION,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            scale_bounds: ScaleBounds::default(),
            lower_rubber: RubberParams::default(),
            upper_rubber: RubberParams::default(),
            wheel: WheelConfig::default(),
            click_threshold: DEFAULT_CLICK_THRESHOLD,
            mouse_pan: true,
            single_touch_pan: true,
            double_touch_pan: true,
        }
    }
}

impl ViewportConfig {
    /// Validate physics and bounds parameters.
    ///
    /// Friction, stiffness, and damping must lie strictly inside (0, 1):
    /// outside that range inertia and the spring never settle.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        if !(self.stiffness > 0.0 && self.stiffness < 1.0) {
            return Err(ConfigError::StiffnessOutOfRange(self.stiffness));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::DampingOutOfRange(self.damping));
        }
        if self.scale <= 0.0 {
            return Err(ConfigError::NonPositiveScale(self.scale));
        }
        if self.click_threshold < 0.0 {
            return Err(ConfigError::NegativeClickThreshold(self.click_threshold));
        }
        let bounds_ok = match (self.scale_bounds.min, self.scale_bounds.max) {
            (Some(min), Some(max)) => min > 0.0 && min <= max,
            (Some(min), None) => min > 0.0,
            (None, Some(max)) => max > 0.0,
            (None, None) => true,
        };
        if !bounds_ok {
            return Err(ConfigError::InvalidScaleBounds {
                min: self.scale_bounds.min,
                max: self.scale_bounds.max,
            });
        }
        Ok(())
    }
}
