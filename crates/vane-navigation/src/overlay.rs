//! Modal settings overlay state.

use log::debug;
use vane_animation::AnimationPlan;

use crate::plans;

/// Visibility of the modal settings overlay.
///
/// While `Visible`, swipes must not lock and bottom-bar taps must not change
/// the tab; the coordinator's owner enforces that gating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible,
}

/// Owns the overlay flag and keeps open/close idempotent: repeated requests
/// in the same state produce no state change and no duplicate animation.
#[derive(Debug, Default)]
pub struct OverlayCoordinator {
    state: OverlayState,
}

impl OverlayCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == OverlayState::Visible
    }

    /// Show the overlay. Returns the fade plan, or `None` if already
    /// visible.
    pub fn open(&mut self) -> Option<AnimationPlan> {
        match self.state {
            OverlayState::Visible => None,
            OverlayState::Hidden => {
                self.state = OverlayState::Visible;
                debug!("overlay opened");
                Some(plans::overlay_fade())
            }
        }
    }

    /// Hide the overlay. Returns the fade plan, or `None` if already hidden.
    pub fn close(&mut self) -> Option<AnimationPlan> {
        match self.state {
            OverlayState::Hidden => None,
            OverlayState::Visible => {
                self.state = OverlayState::Hidden;
                debug!("overlay closed");
                Some(plans::overlay_fade())
            }
        }
    }
}
