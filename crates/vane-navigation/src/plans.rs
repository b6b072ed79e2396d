//! The navigation core's animation contracts.
//!
//! Three fixed plans cover every transition the state machine emits.

use vane_animation::{AnimationPlan, AnimationSpec, Easing, SpringSpec};

/// Duration of the eased settle after a commit or a bottom-bar tap.
pub const SETTLE_MILLIS: u64 = 280;

/// Duration of the settings overlay fade.
pub const OVERLAY_FADE_MILLIS: u64 = 250;

/// Response period of the cancel spring, in seconds.
pub const CANCEL_RESPONSE_SECS: f32 = 0.28;

/// Damping fraction of the cancel spring.
pub const CANCEL_DAMPING: f32 = 0.9;

/// Eased settle back to rest after a committed swipe or a tab tap.
pub fn settle() -> AnimationPlan {
    AnimationPlan::Tween(AnimationSpec::tween(SETTLE_MILLIS, Easing::EaseInOut))
}

/// Spring back to rest after a cancelled swipe.
pub fn cancel_spring() -> AnimationPlan {
    AnimationPlan::Spring(SpringSpec::from_response(
        CANCEL_RESPONSE_SECS,
        CANCEL_DAMPING,
    ))
}

/// Fade for opening or closing the settings overlay.
pub fn overlay_fade() -> AnimationPlan {
    AnimationPlan::Tween(AnimationSpec::tween(OVERLAY_FADE_MILLIS, Easing::EaseInOut))
}
