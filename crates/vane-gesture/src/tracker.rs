//! One-shot drag classification.
//!
//! A [`GestureTracker`] follows a single pointer gesture from press to
//! release and decides, at most once, whether the drag is a horizontal tab
//! swipe or a vertical scroll. The decision is monotonic: once locked or
//! rejected the classification never changes for the rest of the gesture.

use log::debug;

use crate::constants::{AXIS_LOCK_MARGIN, START_SLOP};

/// A drag displacement relative to the gesture start position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    /// Horizontal displacement since the pointer went down.
    pub dx: f32,
    /// Vertical displacement since the pointer went down.
    pub dy: f32,
}

impl DragSample {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Straight-line distance from the gesture start.
    pub fn distance(&self) -> f32 {
        self.dx.hypot(self.dy)
    }
}

/// Per-gesture classification state.
///
/// Starts `Undecided`; transitions to `LockedHorizontal` or `Rejected` at
/// most once per gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragClassification {
    /// Not enough evidence yet to claim or release the drag.
    #[default]
    Undecided,
    /// The drag is a tab swipe; vertical movement is ignored from here on.
    LockedHorizontal,
    /// The drag is a vertical scroll; this gesture will never swipe.
    Rejected,
}

/// Classifies one gesture at a time.
///
/// State is fully reset at gesture start via [`GestureTracker::begin`].
/// While either suppressor (keyboard or overlay) is active before the lock
/// happens, the gesture stays `Undecided` for its remainder so that vertical
/// scrolling and overlay interaction stay unobstructed.
#[derive(Debug, Default)]
pub struct GestureTracker {
    classification: DragClassification,
    suppressed: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new gesture.
    pub fn begin(&mut self) {
        self.classification = DragClassification::Undecided;
        self.suppressed = false;
    }

    /// Feed one sample; returns the classification after this sample.
    ///
    /// `keyboard_visible` / `overlay_visible` are the two suppressors: if
    /// either is true at gesture start or becomes true before the lock, the
    /// gesture is permanently left `Undecided`.
    pub fn on_sample(
        &mut self,
        sample: DragSample,
        keyboard_visible: bool,
        overlay_visible: bool,
    ) -> DragClassification {
        match self.classification {
            // The decision is one-shot; later samples cannot revisit it.
            DragClassification::LockedHorizontal | DragClassification::Rejected => {
                return self.classification;
            }
            DragClassification::Undecided => {}
        }

        if self.suppressed {
            return DragClassification::Undecided;
        }
        if keyboard_visible || overlay_visible {
            self.suppressed = true;
            debug!(
                "gesture suppressed (keyboard={}, overlay={})",
                keyboard_visible, overlay_visible
            );
            return DragClassification::Undecided;
        }

        if sample.distance() < START_SLOP {
            return DragClassification::Undecided;
        }

        let dx = sample.dx.abs();
        let dy = sample.dy.abs();
        if dx > dy + AXIS_LOCK_MARGIN {
            self.classification = DragClassification::LockedHorizontal;
            debug!("gesture locked horizontal at dx={} dy={}", sample.dx, sample.dy);
        } else if dy > dx + AXIS_LOCK_MARGIN {
            self.classification = DragClassification::Rejected;
            debug!("gesture rejected as vertical at dx={} dy={}", sample.dx, sample.dy);
        }
        self.classification
    }

    /// Current classification without feeding a sample.
    pub fn classification(&self) -> DragClassification {
        self.classification
    }

    /// Whether this gesture has locked as a horizontal swipe.
    pub fn is_locked(&self) -> bool {
        self.classification == DragClassification::LockedHorizontal
    }

    /// Whether a suppressor captured this gesture before it could lock.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }
}
