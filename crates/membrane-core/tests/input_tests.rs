// Screen mapping, easing and pointer velocity.

mod common;

use common::*;
use glam::Vec2;
use membrane_core::*;

#[test]
fn screen_corners_map_to_world_corners() {
    let vp = test_viewport();
    assert_eq!(vp.screen_to_world(Vec2::new(0.0, 0.0)), Vec2::new(-10.0, 10.0));
    assert_eq!(vp.screen_to_world(Vec2::new(200.0, 200.0)), Vec2::new(10.0, -10.0));
    assert_eq!(vp.screen_to_world(Vec2::new(100.0, 100.0)), Vec2::ZERO);
    assert_eq!(vp.screen_to_ndc(Vec2::new(200.0, 0.0)), Vec2::new(1.0, 1.0));
}

#[test]
fn degenerate_viewport_maps_to_center() {
    let vp = Viewport::new(0.0, 0.0, 10.0, 10.0);
    assert_eq!(vp.screen_to_world(Vec2::new(50.0, 50.0)), Vec2::ZERO);
}

#[test]
fn perspective_extent_follows_fov_and_aspect() {
    let vp = Viewport::from_perspective(400.0, 200.0, std::f32::consts::FRAC_PI_2, 5.0);
    assert!((vp.world_height - 10.0).abs() < 1e-4);
    assert!((vp.world_width - 20.0).abs() < 1e-4);
    assert!((vp.max_extent() - 20.0).abs() < 1e-4);
}

#[test]
fn ease_endpoints() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn ease_duration_shrinks_with_speed() {
    let tracker = PointerTracker::new(&SimulationConfig::default());
    assert!((tracker.ease_duration(0.0) - 0.3).abs() < 1e-6);
    assert!((tracker.ease_duration(1.0) - 0.25).abs() < 1e-6);
    assert!((tracker.ease_duration(100.0) - 0.05).abs() < 1e-6);
}

#[test]
fn smoothed_pointer_reaches_target() {
    let mut tracker = PointerTracker::new(&SimulationConfig::default());
    tracker.pointer_move(Vec2::new(2.0, -1.0));
    assert_eq!(tracker.raw_target(), Vec2::new(2.0, -1.0));
    assert_eq!(tracker.smoothed(), Vec2::ZERO);

    tracker.step(0.1);
    let partial = tracker.smoothed();
    assert!(partial.x > 0.0 && partial.x < 2.0);

    for _ in 0..30 {
        tracker.step(FRAME);
    }
    assert!(tracker.is_settled());
    assert!((tracker.smoothed() - Vec2::new(2.0, -1.0)).length() < 1e-6);
}

#[test]
fn velocity_decays_between_events() {
    let mut tracker = PointerTracker::new(&SimulationConfig::default());
    tracker.pointer_move(Vec2::new(1.0, 0.0));
    assert!((tracker.velocity().x - 1.0).abs() < 1e-6);
    tracker.step(FRAME);
    assert!((tracker.velocity().x - 0.8).abs() < 1e-4);
    for _ in 0..120 {
        tracker.step(FRAME);
    }
    assert!(tracker.velocity().length() < 1e-6);
}

#[test]
fn press_and_release_toggle_dragging() {
    let mut tracker = PointerTracker::new(&SimulationConfig::default());
    assert!(!tracker.is_dragging());
    tracker.pointer_down(Vec2::new(0.5, 0.5));
    assert!(tracker.is_dragging());
    assert_eq!(tracker.velocity(), Vec2::ZERO);
    tracker.pointer_up();
    assert!(!tracker.is_dragging());
}
