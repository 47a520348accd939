use super::*;

use crate::constraints::PanConstraints;
use crate::coordinate_mapper::HandleMapping;
use crate::gesture_constants::LIVE_SNAP_THRESHOLD;
use crate::input::types::InputEvent;
use crate::snap::SnapPoints;

fn constraints(max_offset: f32) -> PanConstraints {
    PanConstraints {
        max_offset,
        scale: 1.0,
    }
}

#[test]
fn content_drag_is_rejected_when_panning_disabled() {
    let mut drag = ContentDragController::new(100);
    assert!(!drag.begin(&InputEvent::down(1, 10.0, 0), 0.0, 0.0, &constraints(0.0)));
    assert!(!drag.is_active());
}

#[test]
fn content_drag_ignores_secondary_pointers() {
    let mut drag = ContentDragController::new(100);
    let secondary = InputEvent::down(2, 10.0, 0).with_primary(false);
    assert!(!drag.begin(&secondary, 0.0, 0.0, &constraints(500.0)));

    assert!(drag.begin(&InputEvent::down(1, 10.0, 0), 0.0, 0.0, &constraints(500.0)));
    assert_eq!(drag.update(&InputEvent::moved(2, 90.0, 8), &constraints(500.0)), None);
    assert_eq!(drag.end(&InputEvent::up(2, 90.0, 16), 0.0), None);
    assert!(drag.is_active());
}

#[test]
fn content_drag_second_begin_is_dropped() {
    let mut drag = ContentDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 100.0, 0), 20.0, 0.0, &constraints(500.0)));
    assert!(!drag.begin(&InputEvent::down(1, 400.0, 5), -50.0, 0.0, &constraints(500.0)));
    assert_eq!(drag.session().map(|s| s.start_offset), Some(20.0));
}

#[test]
fn content_drag_moves_offset_with_pointer_and_clamps() {
    let bounds = constraints(500.0);
    let mut drag = ContentDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 600.0, 0), 0.0, 0.0, &bounds));

    assert_eq!(drag.update(&InputEvent::moved(1, 300.0, 16), &bounds), Some(-300.0));
    assert_eq!(drag.update(&InputEvent::moved(1, -200.0, 32), &bounds), Some(-500.0));
    assert_eq!(drag.update(&InputEvent::moved(1, 650.0, 48), &bounds), Some(50.0));

    let release = drag.end(&InputEvent::up(1, 650.0, 60), 50.0).expect("session open");
    assert_eq!(release.kind, GestureKind::Content);
    // The largest excursion was 800 px to the left.
    assert_eq!(release.distance, 800.0);
    assert_eq!(release.position, 50.0);
    assert!(!drag.is_active());
}

#[test]
fn content_drag_release_velocity_uses_recent_window() {
    let bounds = constraints(500.0);
    let mut drag = ContentDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 0.0, 1_000), 0.0, 0.0, &bounds));
    drag.update(&InputEvent::moved(1, -20.0, 1_010), &bounds);
    drag.update(&InputEvent::moved(1, -40.0, 1_020), &bounds);
    drag.update(&InputEvent::moved(1, -60.0, 1_030), &bounds);

    let release = drag.end(&InputEvent::up(1, -60.0, 1_030), -60.0).expect("open");
    assert!((release.velocity + 2.0).abs() < 1e-4);
}

#[test]
fn update_and_end_without_session_are_noops() {
    let mut content = ContentDragController::new(100);
    assert_eq!(content.update(&InputEvent::moved(1, 5.0, 0), &constraints(100.0)), None);
    assert_eq!(content.end(&InputEvent::up(1, 5.0, 0), 0.0), None);

    let mut handle = HandleDragController::new(100);
    let mapping = HandleMapping::new(100.0, 200.0);
    assert_eq!(
        handle.update(&InputEvent::moved(1, 5.0, 0), &mapping, &SnapPoints::default(), 15.0),
        None
    );
    assert_eq!(handle.end(&InputEvent::cancel(1, 5.0, 0)), None);
}

#[test]
fn handle_drag_requires_track_and_overflow() {
    let mut drag = HandleDragController::new(100);
    let event = InputEvent::down(1, 50.0, 0);
    assert!(!drag.begin(&event, 0.0, 0.0, &HandleMapping::new(0.0, 700.0)));
    assert!(!drag.begin(&event, 0.0, 0.0, &HandleMapping::new(500.0, 0.0)));
    assert!(drag.begin(&event, 0.0, 350.0, &HandleMapping::new(500.0, 700.0)));
}

#[test]
fn handle_drag_maps_inverted_offset() {
    let mapping = HandleMapping::new(500.0, 700.0);
    let snaps = SnapPoints::default();
    let mut drag = HandleDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 400.0, 0), 0.0, 350.0, &mapping));

    let update = drag
        .update(&InputEvent::moved(1, 500.0, 16), &mapping, &snaps, LIVE_SNAP_THRESHOLD)
        .expect("move applies");
    assert_eq!(update.handle_position, 450.0);
    assert_eq!(update.snapped_to, None);
    // Handle right of center means content left of center.
    assert!((update.offset - (-500.0 / 3.5)).abs() < 1e-3);
}

#[test]
fn handle_drag_snaps_to_middle_once() {
    let mapping = HandleMapping::new(500.0, 700.0);
    let snaps = SnapPoints::default();
    let mut drag = HandleDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 100.0, 0), 300.0, 140.0, &mapping));

    // 140 + 200 = 340, within 15 of 350
    let first = drag
        .update(&InputEvent::moved(1, 300.0, 16), &mapping, &snaps, LIVE_SNAP_THRESHOLD)
        .expect("move applies");
    assert_eq!(first.handle_position, 350.0);
    assert_eq!(first.offset, 0.0);
    assert!(first.entered_snap_zone);

    let second = drag
        .update(&InputEvent::moved(1, 305.0, 32), &mapping, &snaps, LIVE_SNAP_THRESHOLD)
        .expect("move applies");
    assert_eq!(second.handle_position, 350.0);
    assert!(!second.entered_snap_zone);
    assert_eq!(drag.last_snap_position(), Some(350.0));

    let outside = drag
        .update(&InputEvent::moved(1, 330.0, 48), &mapping, &snaps, LIVE_SNAP_THRESHOLD)
        .expect("move applies");
    assert_eq!(outside.handle_position, 370.0);
    assert_eq!(drag.last_snap_position(), None);

    let again = drag
        .update(&InputEvent::moved(1, 310.0, 64), &mapping, &snaps, LIVE_SNAP_THRESHOLD)
        .expect("move applies");
    assert!(again.entered_snap_zone);
}

#[test]
fn handle_drag_snaps_at_track_start() {
    let mapping = HandleMapping::new(500.0, 700.0);
    let snaps = SnapPoints::default();
    let mut drag = HandleDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 100.0, 0), 0.0, 350.0, &mapping));

    let first = drag
        .update(&InputEvent::moved(1, -240.0, 16), &mapping, &snaps, LIVE_SNAP_THRESHOLD)
        .expect("move applies");
    assert_eq!(first.handle_position, 0.0);
    assert_eq!(first.offset, 500.0);
    assert!(first.entered_snap_zone);

    let second = drag
        .update(&InputEvent::moved(1, -245.0, 32), &mapping, &snaps, LIVE_SNAP_THRESHOLD)
        .expect("move applies");
    assert!(!second.entered_snap_zone);
}

#[test]
fn handle_drag_skips_moves_without_track() {
    let snaps = SnapPoints::default();
    let mut drag = HandleDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 0.0, 0), 0.0, 350.0, &HandleMapping::new(500.0, 700.0)));
    let lost_track = HandleMapping::new(500.0, 0.0);
    assert_eq!(
        drag.update(&InputEvent::moved(1, 40.0, 16), &lost_track, &snaps, LIVE_SNAP_THRESHOLD),
        None
    );
    assert!(drag.is_active());
}

#[test]
fn handle_release_reports_handle_space() {
    let mapping = HandleMapping::new(500.0, 700.0);
    let snaps = SnapPoints::default();
    let mut drag = HandleDragController::new(100);
    assert!(drag.begin(&InputEvent::down(1, 0.0, 0), 0.0, 350.0, &mapping));
    drag.update(&InputEvent::moved(1, 50.0, 10), &mapping, &snaps, LIVE_SNAP_THRESHOLD);
    drag.update(&InputEvent::moved(1, 100.0, 20), &mapping, &snaps, LIVE_SNAP_THRESHOLD);

    let release = drag.end(&InputEvent::cancel(1, 100.0, 20)).expect("open");
    assert_eq!(release.kind, GestureKind::Handle);
    assert_eq!(release.position, 450.0);
    assert_eq!(release.distance, 100.0);
    assert!((release.velocity - 5.0).abs() < 1e-4);
}

#[test]
fn suppression_window_lifecycle() {
    let mut suppression = DragSuppression::default();
    assert!(!suppression.is_active(0, 150));

    assert!(suppression.record_release(42.0, 1_000));
    assert!(suppression.is_active(1_000, 150));
    assert!(suppression.is_active(1_150, 150));
    assert!(!suppression.is_active(1_151, 150));
    // Expiry cleared the flag.
    assert!(!suppression.is_raised());

    assert!(suppression.record_release(11.0, 2_000));
    assert!(!suppression.record_release(10.0, 2_010));
    assert!(!suppression.is_active(2_010, 150));
}
