//! Physics engines driving view animation after a gesture ends.
//!
//! Two models only: exponential-decay inertia for continued panning, and a
//! damped spring for the scale. Both tick once per granted animation frame
//! and stop on an epsilon-settlement condition.

mod inertia;
mod spring;

pub use inertia::{InertiaEngine, InertiaTick, Velocity};
pub use spring::{ScaleSpring, SpringTick};
