//! End-to-end gesture flows through the navigation controller.

use vane_animation::AnimationPlan;
use vane_navigation::prelude::*;

const WIDTH: f32 = 300.0;

fn controller() -> NavigationController {
    NavigationController::new(WIDTH)
}

/// Drive a horizontal drag through intermediate samples to its final delta.
fn swipe(nav: &mut NavigationController, deltas: &[f32]) -> DragUpdate {
    let mut last = None;
    for &dx in deltas {
        last = Some(nav.on_drag_changed(DragSample::new(dx, 0.0), false, false));
    }
    last.expect("at least one sample")
}

#[test]
fn committed_swipe_switches_home_to_search() {
    let mut nav = controller();
    let update = swipe(&mut nav, &[-20.0, -60.0, -110.0]);
    assert_eq!(update.classification, DragClassification::LockedHorizontal);
    assert_eq!(update.offset_home, -110.0);
    assert_eq!(update.offset_search, 190.0);

    let end = nav.on_drag_ended(DragSample::new(-110.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Commit(Tab::Search));
    assert_eq!(nav.current_tab(), Tab::Search);
}

#[test]
fn commit_threshold_boundary_at_quarter_width() {
    // -76 of 300 is past 25%: commits.
    let mut nav = controller();
    swipe(&mut nav, &[-76.0]);
    let end = nav.on_drag_ended(DragSample::new(-76.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Commit(Tab::Search));

    // -74 of 300 is short: cancels.
    let mut nav = controller();
    swipe(&mut nav, &[-74.0]);
    let end = nav.on_drag_ended(DragSample::new(-74.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Cancel);
    assert_eq!(nav.current_tab(), Tab::Home);
}

#[test]
fn commit_preserves_continuity_with_a_two_phase_settle() {
    let mut nav = controller();
    swipe(&mut nav, &[-90.0]);
    let search_before = nav.offset_of(Tab::Search);
    assert_eq!(search_before, 210.0);

    let end = nav.on_drag_ended(DragSample::new(-90.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Commit(Tab::Search));

    // Phase 1: instantaneous reposition to the same on-screen position.
    assert_eq!(end.updates[0].target, 210.0);
    assert_eq!(end.updates[0].plan, AnimationPlan::None);
    // Phase 2: eased settle to rest.
    assert_eq!(end.updates[1].target, 0.0);
    assert!(end.updates[1].plan.is_animated());

    // No jump at the instant of commit: the now-current Search screen reads
    // back at exactly its pre-commit position.
    assert_eq!(nav.offset_of(Tab::Search), search_before);

    nav.on_animation_completed();
    assert_eq!(nav.offset_of(Tab::Search), 0.0);
    assert_eq!(nav.offset_of(Tab::Home), -300.0);
}

#[test]
fn cancelled_swipe_springs_back_without_tab_change() {
    let mut nav = controller();
    swipe(&mut nav, &[-30.0, -50.0]);
    let end = nav.on_drag_ended(DragSample::new(-50.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Cancel);
    assert_eq!(end.updates.len(), 1);
    assert!(matches!(end.plan(), AnimationPlan::Spring(_)));
    assert_eq!(nav.current_tab(), Tab::Home);

    nav.on_animation_completed();
    assert_eq!(nav.live_offset(), 0.0);
}

#[test]
fn fast_flick_commits_even_when_release_sample_under_reports() {
    let mut nav = controller();
    swipe(&mut nav, &[-20.0, -130.0]);
    // Release sample reports less travel than the live drag did.
    let end = nav.on_drag_ended(DragSample::new(-30.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Commit(Tab::Search));
}

#[test]
fn wrong_direction_drag_previews_nothing_and_cancels() {
    let mut nav = controller();
    let update = swipe(&mut nav, &[90.0]);
    // Home has no neighbor to its left: the permitted-sign clamp pins it.
    assert_eq!(update.offset_home, 0.0);
    assert_eq!(update.offset_search, WIDTH);
    let end = nav.on_drag_ended(DragSample::new(90.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Cancel);
}

#[test]
fn round_trip_search_and_back() {
    let mut nav = controller();
    swipe(&mut nav, &[-120.0]);
    nav.on_drag_ended(DragSample::new(-120.0, 0.0));
    nav.on_animation_completed();
    assert_eq!(nav.current_tab(), Tab::Search);

    swipe(&mut nav, &[120.0]);
    let end = nav.on_drag_ended(DragSample::new(120.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Commit(Tab::Home));
    assert_eq!(end.updates[0].target, -180.0);
    nav.on_animation_completed();
    assert_eq!(nav.current_tab(), Tab::Home);
    assert_eq!(nav.live_offset(), 0.0);
}

#[test]
fn keyboard_suppression_keeps_offsets_at_rest() {
    let mut nav = controller();
    for dx in [-15.0, -40.0, -90.0, -200.0] {
        let update = nav.on_drag_changed(DragSample::new(dx, 0.0), true, false);
        assert_eq!(update.classification, DragClassification::Undecided);
        assert_eq!(update.offset_home, 0.0);
        assert_eq!(update.offset_search, WIDTH);
    }
    let end = nav.on_drag_ended(DragSample::new(-200.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Cancel);
    assert_eq!(nav.current_tab(), Tab::Home);
}

#[test]
fn vertical_drag_is_rejected_and_never_moves_screens() {
    let mut nav = controller();
    let update = nav.on_drag_changed(DragSample::new(-4.0, 30.0), false, false);
    assert_eq!(update.classification, DragClassification::Rejected);
    assert_eq!(update.offset_home, 0.0);

    // Even a later strongly-horizontal sample stays rejected.
    let update = nav.on_drag_changed(DragSample::new(-150.0, 30.0), false, false);
    assert_eq!(update.classification, DragClassification::Rejected);
    assert_eq!(update.offset_home, 0.0);
}

#[test]
fn classification_is_monotonic_once_locked() {
    let mut nav = controller();
    swipe(&mut nav, &[-40.0]);
    for dy in [0.0, 80.0, 400.0] {
        let update = nav.on_drag_changed(DragSample::new(-45.0, dy), false, false);
        assert_eq!(update.classification, DragClassification::LockedHorizontal);
    }
}

#[test]
fn overlay_gates_taps_and_swipes_until_closed() {
    let mut nav = controller();
    nav.open_overlay();
    nav.on_animation_completed();

    assert_eq!(nav.on_bottom_bar_tap(Tab::Search), AnimationPlan::None);
    assert_eq!(nav.current_tab(), Tab::Home);

    let update = swipe(&mut nav, &[-150.0]);
    assert_eq!(update.classification, DragClassification::Undecided);
    let end = nav.on_drag_ended(DragSample::new(-150.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Cancel);

    nav.close_overlay();
    nav.on_animation_completed();
    assert!(nav.on_bottom_bar_tap(Tab::Search).is_animated());
    assert_eq!(nav.current_tab(), Tab::Search);
}

#[test]
fn overlay_open_requested_twice_triggers_one_fade() {
    let mut nav = controller();
    let first = nav.open_overlay();
    assert!(first.is_animated());
    let second = nav.open_overlay();
    assert_eq!(second, AnimationPlan::None);
    assert_eq!(nav.overlay_state(), OverlayState::Visible);
}

#[test]
fn rotation_mid_gesture_resets_cleanly() {
    let mut nav = controller();
    swipe(&mut nav, &[-80.0]);
    nav.set_viewport_width(650.0);
    assert_eq!(nav.live_offset(), 0.0);

    // The next gesture computes against the new width: 25% of 650.
    swipe(&mut nav, &[-170.0]);
    let end = nav.on_drag_ended(DragSample::new(-170.0, 0.0));
    assert_eq!(end.outcome, GestureEndOutcome::Commit(Tab::Search));
    assert_eq!(end.updates[0].target, 650.0 - 170.0);
}
