//! End-of-gesture commit policy.
//!
//! Decides whether a released drag finalizes a tab switch, and computes the
//! continuity-preserving offset that seeds the settle animation so the
//! committed screen does not jump at the instant of the flip.

use log::debug;

use crate::offset::{clamp_drag, sanitize_width};
use crate::tab::Tab;

/// Fraction of the viewport width a drag must cross to commit.
pub const COMMIT_FRACTION: f32 = 0.25;

/// What a finished gesture did to the tab state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureEndOutcome {
    /// The drag crossed the threshold in a valid direction; `0` is the new
    /// current tab.
    Commit(Tab),
    /// No tab change; the live offset returns to rest.
    Cancel,
}

/// Decide the outcome of a finished gesture.
///
/// `old_drag` is the last live (sign-clamped) drag value before release and
/// `final_delta_x` the horizontal delta of the release sample. Checking both
/// against the threshold guards against a fast flick whose final sample
/// under-reports the travel. An unlocked gesture or a visible overlay always
/// cancels.
pub fn decide(
    old_drag: f32,
    final_delta_x: f32,
    current: Tab,
    width: f32,
    was_locked: bool,
    overlay_visible: bool,
) -> GestureEndOutcome {
    if !was_locked || overlay_visible {
        return GestureEndOutcome::Cancel;
    }

    let threshold = sanitize_width(width) * COMMIT_FRACTION;
    let passed = final_delta_x.abs() > threshold || old_drag.abs() > threshold;

    // Each tab only commits toward its single neighbor.
    let valid_direction = match current {
        Tab::Home => final_delta_x < 0.0,
        Tab::Search => final_delta_x > 0.0,
    };
    let outcome = if passed && valid_direction {
        GestureEndOutcome::Commit(current.neighbor())
    } else {
        GestureEndOutcome::Cancel
    };
    debug!(
        "gesture end: old_drag={old_drag} final_dx={final_delta_x} current={current:?} -> {outcome:?}"
    );
    outcome
}

/// Offset that keeps the newly-current screen at the exact on-screen
/// position it had the instant before the commit flipped `current`.
///
/// Before the flip the incoming screen sat at `±width + old_drag`; after the
/// flip its offset is read directly, so the seed is that same absolute
/// value. Deliberately not sign-clamped: an overshooting drag seeds an
/// overshot settle rather than a jump.
pub fn continuity_seed(from: Tab, old_drag: f32, width: f32) -> f32 {
    let width = sanitize_width(width);
    from.neighbor_rest_sign() * width + clamp_drag(from, old_drag)
}
