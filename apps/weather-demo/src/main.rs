//! Scripted drive of the navigation core.
//!
//! Replays the gesture scenarios a finger would produce (committed swipe,
//! cancelled swipe, suppressed drag, tap navigation, overlay gating,
//! keyboard interrupt) and logs every classification, offset, outcome and
//! plan. Steps the settle interpolators to show the continuity hand-off
//! numerically. No window, no network.

use log::info;
use vane_animation::{AnimationPlan, SpringAnimation, TweenAnimation};
use vane_navigation::prelude::*;
use vane_navigation::screen_offset;

const VIEWPORT_WIDTH: f32 = 390.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut nav = NavigationController::new(VIEWPORT_WIDTH);
    committed_swipe(&mut nav);
    cancelled_swipe(&mut nav);
    suppressed_drag(&mut nav);
    tap_navigation(&mut nav);
    overlay_gating(&mut nav);
    keyboard_interrupt(&mut nav);
    info!("done; final tab {:?}", nav.current_tab());
}

fn drag(nav: &mut NavigationController, deltas: &[(f32, f32)]) {
    for &(dx, dy) in deltas {
        let update = nav.on_drag_changed(DragSample::new(dx, dy), false, false);
        info!(
            "  sample dx={dx:7.1} dy={dy:5.1} -> {:?} home={:7.1} search={:7.1}",
            update.classification, update.offset_home, update.offset_search
        );
    }
}

fn release(nav: &mut NavigationController, dx: f32) -> GestureEnd {
    let end = nav.on_drag_ended(DragSample::new(dx, 0.0));
    info!("  release dx={dx:7.1} -> {:?}", end.outcome);
    for update in &end.updates {
        info!("    phase: target={:7.1} plan={:?}", update.target, update.plan);
    }
    end
}

/// Swipe far enough left to commit Home -> Search, then run the settle.
fn committed_swipe(nav: &mut NavigationController) {
    info!("-- committed swipe --");
    drag(nav, &[(-15.0, 2.0), (-60.0, 4.0), (-120.0, 4.0)]);
    let end = release(nav, -120.0);

    // Phase 1 repositioned without animation; phase 2 is the eased settle.
    if let [seed, settle] = end.updates.as_slice() {
        if let AnimationPlan::Tween(spec) = settle.plan {
            let tween = TweenAnimation::new(seed.target, settle.target, spec);
            for elapsed in [0u64, 70, 140, 210, 280] {
                let raw = tween.value_at(elapsed);
                info!(
                    "    settle t={elapsed:3}ms search={:7.1} home={:7.1}",
                    screen_offset(Tab::Search, nav.current_tab(), raw, VIEWPORT_WIDTH),
                    screen_offset(Tab::Home, nav.current_tab(), raw, VIEWPORT_WIDTH)
                );
            }
        }
    }
    nav.on_animation_completed();
    info!("  now on {:?}", nav.current_tab());
}

/// Swipe back toward Home but not past the threshold: spring-cancel.
fn cancelled_swipe(nav: &mut NavigationController) {
    info!("-- cancelled swipe --");
    drag(nav, &[(20.0, 0.0), (55.0, 3.0)]);
    let end = release(nav, 55.0);

    if let Some(update) = end.updates.first() {
        if let AnimationPlan::Spring(spec) = update.plan {
            let mut spring = SpringAnimation::new(nav.live_offset(), update.target, spec);
            let mut elapsed = 0.0f32;
            while !spring.is_settled() && elapsed < 2.0 {
                spring.step(1.0 / 60.0);
                elapsed += 1.0 / 60.0;
            }
            info!("    spring settled after {:.2}s at {:.1}", elapsed, spring.value());
        }
    }
    nav.on_animation_completed();
    info!("  still on {:?}", nav.current_tab());
}

/// With the keyboard up, samples never classify and screens never move.
fn suppressed_drag(nav: &mut NavigationController) {
    info!("-- suppressed drag (keyboard up) --");
    nav.on_keyboard_visibility_changed(true);
    for dx in [-40.0, -150.0] {
        let update = nav.on_drag_changed(DragSample::new(dx, 0.0), true, false);
        info!(
            "  sample dx={dx:7.1} -> {:?} home={:7.1}",
            update.classification, update.offset_home
        );
    }
    let _ = release(nav, -150.0);
    nav.on_keyboard_visibility_changed(false);
}

fn tap_navigation(nav: &mut NavigationController) {
    info!("-- tap navigation --");
    let plan = nav.on_bottom_bar_tap(Tab::Home);
    info!("  tap Home -> {plan:?}");
    nav.on_animation_completed();
    let plan = nav.on_bottom_bar_tap(Tab::Home);
    info!("  tap Home again (current) -> {plan:?}");
}

fn overlay_gating(nav: &mut NavigationController) {
    info!("-- overlay gating --");
    info!("  open -> {:?}", nav.open_overlay());
    nav.on_animation_completed();
    info!("  open again -> {:?}", nav.open_overlay());
    info!("  tap while visible -> {:?}", nav.on_bottom_bar_tap(Tab::Search));
    drag(nav, &[(-130.0, 0.0)]);
    let _ = release(nav, -130.0);
    info!("  close -> {:?}", nav.close_overlay());
    nav.on_animation_completed();
}

/// The keyboard appearing mid-drag hard-cancels the gesture.
fn keyboard_interrupt(nav: &mut NavigationController) {
    info!("-- keyboard interrupt mid-drag --");
    drag(nav, &[(-80.0, 0.0)]);
    nav.on_keyboard_visibility_changed(true);
    info!("  keyboard shown: offset={:.1}", nav.live_offset());
    let _ = release(nav, -80.0);
    nav.on_keyboard_visibility_changed(false);
}
