//! End-to-end pan scenarios driven through the test harness.

use viewfinder_foundation::{offset_to_handle, InputEventKind};
use viewfinder_testing::{PanTestRule, ScriptedGeometry};
use viewfinder_ui::{
    CursorHint, GeometryError, GeometryEvent, HapticPulse, PanConfig, PanPhase, Size,
    SurfaceGeometry, TrackGeometry,
};

#[test]
fn drag_by_minus_300_moves_handle_right() {
    let mut rule = PanTestRule::default();
    assert_eq!(rule.manager().max_offset(), 500.0);

    rule.send_content(1, InputEventKind::Down, 600.0);
    rule.advance_clock(16);
    rule.send_content(1, InputEventKind::Move, 300.0);

    assert_eq!(rule.manager().offset(), -300.0);
    let snapshot = rule.render();
    assert!((snapshot.handle.position - offset_to_handle(-300.0, 500.0, 700.0)).abs() < 1e-3);
    assert!(snapshot.handle.position > 350.0);
}

#[test]
fn slow_drag_leaves_offset_where_released() {
    let mut rule = PanTestRule::default();
    // 20 units over 400ms: 0.05 units/ms inside the velocity horizon.
    assert!(rule.drag_content(600.0, 580.0, 4, 400));
    assert_eq!(rule.manager().offset(), -20.0);
    assert_eq!(rule.manager().phase(), PanPhase::Idle);
    assert!(!rule.runtime_handle().has_frame_callbacks());
    assert!(rule.manager().was_recently_dragging());
}

#[test]
fn handle_drag_near_midpoint_snaps_with_single_pulse() {
    let mut rule = PanTestRule::default();
    rule.manager().set_offset(400.0, false);
    assert!((rule.manager().handle_position() - 70.0).abs() < 1e-3);

    rule.send_handle(7, InputEventKind::Down, 100.0);
    for (step, x) in [300.0, 370.0, 375.0, 382.0].into_iter().enumerate() {
        rule.advance_clock(16);
        rule.send_handle(7, InputEventKind::Move, x);
        if step > 0 {
            assert_eq!(rule.manager().handle_position(), 350.0);
        }
    }
    assert_eq!(rule.manager().offset(), 0.0);
    assert_eq!(rule.haptics().count(HapticPulse::SnapEnter), 1);

    // Released while still moving fast: coasts to the track end and snaps.
    rule.send_handle(7, InputEventKind::Up, 382.0);
    rule.pump_until_idle();
    assert_eq!(rule.manager().handle_position(), 700.0);
    assert_eq!(rule.manager().offset(), -500.0);
    assert_eq!(rule.haptics().count(HapticPulse::ReleaseSnap), 1);
}

#[test]
fn resize_below_viewport_disables_panning() {
    let mut rule = PanTestRule::default();
    assert!(rule.drag_content(500.0, 700.0, 2, 1_000));
    rule.pump_until_idle();
    assert!(rule.manager().offset() > 0.0);

    rule.geometry().set_rendered_width(1000.0);
    assert!(!rule.manager().on_geometry_event(GeometryEvent::Resize));
    assert_eq!(rule.manager().max_offset(), 0.0);
    assert_eq!(rule.manager().offset(), 0.0);
    assert!(!rule.manager().update_size());

    let snapshot = rule.render();
    assert!(snapshot.handle.centered);
    assert_eq!(snapshot.handle.cursor, CursorHint::Default);
}

#[test]
fn orientation_change_restores_panning() {
    let rule = PanTestRule::new(ScriptedGeometry::new(
        SurfaceGeometry::new(Size::new(2000.0, 1000.0), Size::new(800.0, 400.0)),
        Size::new(1000.0, 600.0),
        TrackGeometry::new(1000.0, 300.0),
    ));
    assert!(!rule.manager().is_panning_enabled());

    rule.geometry().set_viewport(Size::new(400.0, 900.0));
    assert!(rule.manager().on_geometry_event(GeometryEvent::OrientationChange));
    assert_eq!(rule.manager().max_offset(), 200.0);
    assert_eq!(rule.manager().constraints().scale, 0.4);
}

#[test]
fn fling_settles_within_bounds_and_syncs_handle() {
    let mut rule = PanTestRule::default();
    assert!(rule.drag_content(200.0, 500.0, 3, 30));
    assert_eq!(rule.manager().phase(), PanPhase::Settling);
    assert_eq!(rule.manager().offset(), 300.0);

    // The coast is timed from the release, so the first frame already moves.
    rule.advance_frame();
    let first = rule.manager().offset();
    assert!(first > 300.0 && first < 500.0, "first frame at {first}");

    // Duration is capped at 400ms from the release: 24 frames at 60Hz.
    let frames = 1 + rule.pump_until_idle();
    assert_eq!(frames, 24);
    assert_eq!(rule.manager().offset(), 500.0);
    assert!(rule.manager().handle_position().abs() < 1e-3);
}

#[test]
fn suppression_follows_drag_distance() {
    let mut rule = PanTestRule::default();
    assert!(rule.drag_content(600.0, 590.0, 1, 200));
    assert!(!rule.manager().was_recently_dragging());

    rule.advance_time(500);
    assert!(rule.drag_content(600.0, 589.0, 1, 200));
    assert!(rule.manager().was_recently_dragging());
    rule.advance_clock(150);
    assert!(rule.manager().was_recently_dragging_within(150));
    rule.advance_clock(1);
    assert!(!rule.manager().was_recently_dragging_within(150));
}

#[test]
fn handle_track_loss_is_absorbed() {
    let mut rule = PanTestRule::default();
    rule.geometry().fail_track(GeometryError::Detached { what: "handle" });
    assert!(!rule.drag_handle(100.0, 200.0, 2, 100));
    assert!(rule.drag_content(600.0, 500.0, 2, 400));
    assert_eq!(rule.manager().handle_position(), 350.0);

    rule.geometry().set_track(TrackGeometry::new(1000.0, 300.0));
    assert!(rule.manager().on_geometry_event(GeometryEvent::ContentReady));
    let expected = offset_to_handle(rule.manager().offset(), 500.0, 700.0);
    assert!((rule.manager().handle_position() - expected).abs() < 1e-3);
}

#[test]
fn custom_config_changes_feel() {
    let config = PanConfig::default()
        .with_snap_thresholds(40.0, 60.0)
        .with_min_drag_distance(50.0);
    let mut rule = PanTestRule::with_config(ScriptedGeometry::landscape(), config);

    rule.send_handle(1, InputEventKind::Down, 0.0);
    rule.advance_clock(16);
    rule.send_handle(1, InputEventKind::Move, 35.0);
    assert_eq!(rule.manager().handle_position(), 350.0);
    rule.advance_clock(300);
    rule.send_handle(1, InputEventKind::Up, 35.0);
    assert!(!rule.manager().was_recently_dragging());
}

#[test]
fn every_accepted_press_pulses_once() {
    let mut rule = PanTestRule::default();
    rule.drag_content(600.0, 500.0, 2, 400);
    rule.pump_until_idle();
    rule.drag_handle(0.0, 100.0, 2, 400);
    rule.pump_until_idle();
    assert_eq!(rule.haptics().count(HapticPulse::GestureStart), 2);
}
