//! Gesture primitives for Vane: drag samples and the one-shot
//! horizontal/vertical classifier that decides whether a drag is a tab swipe.

pub mod constants;
pub mod tracker;

pub use constants::{AXIS_LOCK_MARGIN, START_SLOP};
pub use tracker::{DragClassification, DragSample, GestureTracker};
