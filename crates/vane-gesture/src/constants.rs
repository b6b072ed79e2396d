//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. The same thresholds are used by every
//! consumer of the classifier so that a drag never sits in a dead zone where
//! two gesture arenas disagree about who owns it.

/// Minimum travel from the press position before a gesture is eligible for
/// classification.
///
/// Below this distance the classifier emits nothing, leaving finger jitter
/// and incidental contact to whatever vertical scroll arena is running.
/// 10 logical pixels matches the start slop of platform pagers.
pub const START_SLOP: f32 = 10.0;

/// Hysteresis margin for the axis-lock decision.
///
/// A drag locks horizontal only once `|dx| > |dy| + AXIS_LOCK_MARGIN`, and is
/// rejected as vertical on the mirrored condition. The margin keeps a
/// near-diagonal drag undecided instead of flapping between axes.
pub const AXIS_LOCK_MARGIN: f32 = 6.0;
