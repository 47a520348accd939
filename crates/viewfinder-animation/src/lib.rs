//! Animation primitives for Viewfinder.
//!
//! [`TweenAnimation`] drives a single `f32` from a start value to a target
//! over a fixed duration using the runtime's frame callbacks, and
//! [`InertiaCalculator`] turns a release velocity into a settle target and
//! duration.

mod animation;
mod inertia_spec;

pub use animation::{AnimationSpec, Easing, TweenAnimation};
pub use inertia_spec::{InertiaCalculator, InertiaInfo};
