//! Animation primitives for Vane
//!
//! This crate provides the easing curves, tween and spring specifications the
//! navigation core hands to the presentation layer, plus tickable
//! interpolators for running them.

pub mod animation;

// Re-export animation system
pub use animation::*;

pub mod prelude {
    pub use crate::animation::{
        AnimationPlan, AnimationSpec, Easing, SpringAnimation, SpringSpec, TweenAnimation,
    };
}
