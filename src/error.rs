//! Error types for engine construction.
//!
//! The running engine itself has no fatal errors: malformed input degrades
//! gracefully and out-of-range scales are clamped. What can fail is handing
//! the engine a configuration it could never animate with, and that is
//! rejected up front.

use thiserror::Error;

/// Errors produced when validating a [`crate::config::ViewportConfig`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Friction must stay in (0, 1) for inertia to decay
    #[error("inertia friction {0} out of range (0, 1)")]
    FrictionOutOfRange(f32),

    /// Spring stiffness must stay in (0, 1)
    #[error("spring stiffness {0} out of range (0, 1)")]
    StiffnessOutOfRange(f32),

    /// Spring damping must stay in (0, 1) for the spring to settle
    #[error("spring damping {0} out of range (0, 1)")]
    DampingOutOfRange(f32),

    /// Scale bounds must be positive and ordered
    #[error("invalid scale bounds: min {min:?}, max {max:?}")]
    InvalidScaleBounds { min: Option<f32>, max: Option<f32> },

    /// Initial scale must be positive
    #[error("non-positive initial scale {0}")]
    NonPositiveScale(f32),

    /// Click threshold must not be negative
    #[error("negative click threshold {0}")]
    NegativeClickThreshold(f32),
}

/// Result type alias for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
