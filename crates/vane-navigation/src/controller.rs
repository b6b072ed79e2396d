//! The navigation state machine.
//!
//! [`NavigationController`] owns the authoritative tab, the overlay flag,
//! the live drag offset, and the per-gesture classifier, and orchestrates
//! transitions from three sources: gesture commit, bottom-bar tap, and the
//! settings overlay. All methods are synchronous state updates on a single
//! logical thread; animated transitions are described by the returned plans
//! and executed by the presentation layer, which reports back through
//! [`NavigationController::on_animation_completed`].

use log::debug;
use vane_animation::AnimationPlan;
use vane_gesture::{DragClassification, DragSample, GestureTracker};

use crate::commit::{continuity_seed, decide, GestureEndOutcome};
use crate::offset::{clamp_drag, sanitize_width};
use crate::overlay::{OverlayCoordinator, OverlayState};
use crate::plans;
use crate::tab::Tab;

/// Viewport-width change below which a relayout does not disturb gesture
/// state. Sub-pixel jitter must not reset a live drag.
const MATERIAL_VIEWPORT_CHANGE: f32 = 0.5;

/// Snapshot returned for every drag sample: the classification after the
/// sample and the resulting on-screen offset of each screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    pub classification: DragClassification,
    pub offset_home: f32,
    pub offset_search: f32,
}

/// One phase of an offset transition: set `target`, presented per `plan`.
///
/// A commit produces two phases: an instant reposition to the
/// continuity-preserving value, then the eased settle to rest. Splitting the
/// phases is what prevents a visible jump at the flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetUpdate {
    pub target: f32,
    pub plan: AnimationPlan,
}

/// Result of a finished gesture: the outcome plus the ordered offset phases
/// the presentation layer must apply.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureEnd {
    pub outcome: GestureEndOutcome,
    pub updates: Vec<OffsetUpdate>,
}

impl GestureEnd {
    /// The plan of the final (animated) phase, `None` when nothing moves.
    pub fn plan(&self) -> AnimationPlan {
        self.updates
            .last()
            .map(|update| update.plan)
            .unwrap_or(AnimationPlan::None)
    }
}

/// Authoritative navigation state for the Home/Search tab pair and the
/// settings overlay. Queried by the rendering layer; never pushes updates.
#[derive(Debug)]
pub struct NavigationController {
    tab: Tab,
    overlay: OverlayCoordinator,
    tracker: GestureTracker,
    /// Live drag value while locked, or the settle seed after a commit.
    live_offset: f32,
    viewport_width: f32,
    gesture_active: bool,
    keyboard_visible: bool,
    /// An animated transition has been emitted and not yet reported
    /// complete. Tap and commit transitions are no-ops while set.
    transition_in_flight: bool,
}

impl NavigationController {
    pub fn new(viewport_width: f32) -> Self {
        Self {
            tab: Tab::Home,
            overlay: OverlayCoordinator::new(),
            tracker: GestureTracker::new(),
            live_offset: 0.0,
            viewport_width: sanitize_width(viewport_width),
            gesture_active: false,
            keyboard_visible: false,
            transition_in_flight: false,
        }
    }

    /// Feed one drag sample. The first sample after rest (or after a
    /// release) starts a new gesture, which invalidates any transition still
    /// settling.
    pub fn on_drag_changed(
        &mut self,
        sample: DragSample,
        keyboard_visible: bool,
        overlay_visible: bool,
    ) -> DragUpdate {
        if !self.gesture_active {
            self.gesture_active = true;
            self.tracker.begin();
            self.transition_in_flight = false;
            self.live_offset = 0.0;
        }

        let classification = self.tracker.on_sample(
            sample,
            keyboard_visible || self.keyboard_visible,
            overlay_visible || self.overlay.is_visible(),
        );
        if classification == DragClassification::LockedHorizontal {
            self.live_offset = clamp_drag(self.tab, sample.dx);
        }

        DragUpdate {
            classification,
            offset_home: self.offset_of(Tab::Home),
            offset_search: self.offset_of(Tab::Search),
        }
    }

    /// Finish the current gesture with its release sample.
    ///
    /// On commit the returned updates hold the two-phase continuity rewrite:
    /// an instant reposition to the seed offset, then the eased settle to
    /// rest. On a locked cancel, a single spring phase back to rest.
    pub fn on_drag_ended(&mut self, final_sample: DragSample) -> GestureEnd {
        let was_locked = self.tracker.is_locked();
        let old_drag = self.live_offset;
        let outcome = decide(
            old_drag,
            final_sample.dx,
            self.tab,
            self.viewport_width,
            was_locked,
            self.overlay.is_visible(),
        );
        self.gesture_active = false;
        self.tracker.begin();

        match outcome {
            GestureEndOutcome::Commit(to) => {
                let seed = continuity_seed(self.tab, old_drag, self.viewport_width);
                debug!("commit {:?} -> {:?}, settle seed {}", self.tab, to, seed);
                self.tab = to;
                self.live_offset = seed;
                self.transition_in_flight = true;
                GestureEnd {
                    outcome,
                    updates: vec![
                        OffsetUpdate {
                            target: seed,
                            plan: AnimationPlan::None,
                        },
                        OffsetUpdate {
                            target: 0.0,
                            plan: plans::settle(),
                        },
                    ],
                }
            }
            GestureEndOutcome::Cancel => {
                if was_locked && old_drag != 0.0 {
                    self.transition_in_flight = true;
                    GestureEnd {
                        outcome,
                        updates: vec![OffsetUpdate {
                            target: 0.0,
                            plan: plans::cancel_spring(),
                        }],
                    }
                } else {
                    // Nothing ever moved; nothing to settle.
                    self.live_offset = 0.0;
                    GestureEnd {
                        outcome,
                        updates: Vec::new(),
                    }
                }
            }
        }
    }

    /// Bottom-bar tap on `target`. Animated transition straight to the tab,
    /// bypassing drag math; a no-op while the overlay is visible, while a
    /// transition is settling, mid-drag, or on the already-current tab.
    pub fn on_bottom_bar_tap(&mut self, target: Tab) -> AnimationPlan {
        if self.overlay.is_visible()
            || self.transition_in_flight
            || self.gesture_active
            || target == self.tab
        {
            return AnimationPlan::None;
        }
        debug!("tap {:?} -> {:?}", self.tab, target);
        self.tab = target;
        self.live_offset = 0.0;
        self.transition_in_flight = true;
        plans::settle()
    }

    /// Show the settings overlay: fade-in, live offset reset, swipes and
    /// taps suppressed until closed. Idempotent.
    pub fn open_overlay(&mut self) -> AnimationPlan {
        if self.transition_in_flight {
            return AnimationPlan::None;
        }
        match self.overlay.open() {
            Some(plan) => {
                self.cancel_gesture();
                self.transition_in_flight = true;
                plan
            }
            None => AnimationPlan::None,
        }
    }

    /// Hide the settings overlay: fade-out. Idempotent.
    pub fn close_overlay(&mut self) -> AnimationPlan {
        if self.transition_in_flight {
            return AnimationPlan::None;
        }
        match self.overlay.close() {
            Some(plan) => {
                self.transition_in_flight = true;
                plan
            }
            None => AnimationPlan::None,
        }
    }

    /// External keyboard-visibility signal. Showing the keyboard is a hard
    /// cancel for any in-progress gesture: classification reset, live offset
    /// snapped to 0. Tab and overlay state are untouched.
    pub fn on_keyboard_visibility_changed(&mut self, visible: bool) {
        self.keyboard_visible = visible;
        if visible {
            debug!("keyboard shown, cancelling gesture");
            self.cancel_gesture();
        }
    }

    /// New viewport width from a layout pass. A material change (rotation,
    /// split-screen) resets the live offset and classification; sub-pixel
    /// jitter is absorbed.
    pub fn set_viewport_width(&mut self, width: f32) {
        let sanitized = sanitize_width(width);
        let material = (sanitized - self.viewport_width).abs() > MATERIAL_VIEWPORT_CHANGE;
        self.viewport_width = sanitized;
        if material {
            debug!("viewport width now {}, resetting gesture state", sanitized);
            self.cancel_gesture();
        }
    }

    /// The presentation layer finished running the last emitted plan.
    pub fn on_animation_completed(&mut self) {
        if self.transition_in_flight {
            self.transition_in_flight = false;
            self.live_offset = 0.0;
        }
    }

    fn cancel_gesture(&mut self) {
        self.tracker.begin();
        self.gesture_active = false;
        self.live_offset = 0.0;
        self.transition_in_flight = false;
    }

    pub fn current_tab(&self) -> Tab {
        self.tab
    }

    pub fn overlay_state(&self) -> OverlayState {
        self.overlay.state()
    }

    pub fn live_offset(&self) -> f32 {
        self.live_offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn is_transition_in_flight(&self) -> bool {
        self.transition_in_flight
    }

    /// On-screen offset of `screen` for the current live state.
    ///
    /// `live_offset` is sign-clamped as it is produced during the drag, and
    /// a settle seed may legally overshoot past the clamp, so no re-clamp
    /// happens here (re-clamping a seeded overshoot would jump the screen).
    pub fn offset_of(&self, screen: Tab) -> f32 {
        if screen == self.tab {
            self.live_offset
        } else {
            self.tab.neighbor_rest_sign() * self.viewport_width + self.live_offset
        }
    }

    /// Whether `tab` should receive hits: only the current tab, at rest,
    /// with the overlay hidden.
    pub fn is_interactive(&self, tab: Tab) -> bool {
        tab == self.tab
            && !self.overlay.is_visible()
            && !self.gesture_active
            && !self.transition_in_flight
            && self.live_offset == 0.0
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
