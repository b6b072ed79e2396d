//! Pure drag-to-offset geometry.
//!
//! Maps (current tab, live drag delta, viewport width) to the on-screen
//! horizontal offset of each screen. Both offsets are continuous in the raw
//! delta and agree at delta 0 (current tab exactly at 0, neighbor exactly at
//! ±width), which is what makes the drag feel attached to the finger.

use crate::tab::Tab;

/// Smallest viewport width the model will compute with.
const MIN_VIEWPORT_WIDTH: f32 = 1.0;

/// Clamp a viewport width to something safe to divide by and compare
/// against. Non-finite and degenerate widths collapse to the minimum rather
/// than propagating as errors.
pub fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() {
        width.max(MIN_VIEWPORT_WIDTH)
    } else {
        MIN_VIEWPORT_WIDTH
    }
}

/// Clamp a raw drag delta to the sign permitted for the current tab.
///
/// Home only has a neighbor to its right, so only a left drag (negative dx)
/// previews anything; Search is the mirror image. The disallowed direction
/// is pinned to 0 rather than rubber-banded.
pub fn clamp_drag(current: Tab, raw_delta: f32) -> f32 {
    match current {
        Tab::Home => raw_delta.min(0.0),
        Tab::Search => raw_delta.max(0.0),
    }
}

/// On-screen horizontal offset of `screen` while `current` is being dragged
/// by `raw_delta` pixels in a viewport `width` pixels wide.
///
/// The current screen tracks the (sign-clamped) delta directly; the neighbor
/// slides in from its resting position one width away.
pub fn screen_offset(screen: Tab, current: Tab, raw_delta: f32, width: f32) -> f32 {
    let width = sanitize_width(width);
    let clamped = clamp_drag(current, raw_delta);
    if screen == current {
        clamped
    } else {
        current.neighbor_rest_sign() * width + clamped
    }
}
