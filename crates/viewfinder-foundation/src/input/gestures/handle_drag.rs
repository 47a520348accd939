//! Dragging the proxy handle along its track.

use crate::coordinate_mapper::HandleMapping;
use crate::input::gestures::session::{DragRelease, GestureKind, GestureSession};
use crate::input::types::InputEvent;
use crate::snap::{SnapPoints, SnapZoneTracker};
use crate::velocity_tracker::VelocityTracker1D;

/// Result of one handle move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleDragUpdate {
    pub handle_position: f32,
    /// Content offset matching `handle_position`.
    pub offset: f32,
    /// Snap point the handle was forced onto, if any.
    pub snapped_to: Option<f32>,
    /// True only on the move that entered the current snap zone.
    pub entered_snap_zone: bool,
}

/// Moves the handle with the pointer, snapping near canonical positions.
#[derive(Debug, Clone, Default)]
pub struct HandleDragController {
    session: Option<GestureSession>,
    tracker: VelocityTracker1D,
    snap_zone: SnapZoneTracker,
    last_handle: f32,
}

impl HandleDragController {
    pub fn new(velocity_horizon_ms: u64) -> Self {
        Self {
            tracker: VelocityTracker1D::with_horizon(velocity_horizon_ms),
            ..Self::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn last_snap_position(&self) -> Option<f32> {
        self.snap_zone.last_snap_position()
    }

    /// Opens a session for a primary press on the handle. Rejected unless
    /// both the content and the handle have room to move.
    pub fn begin(
        &mut self,
        event: &InputEvent,
        current_offset: f32,
        current_handle: f32,
        mapping: &HandleMapping,
    ) -> bool {
        if !mapping.is_active() || !event.is_primary || self.session.is_some() {
            return false;
        }
        self.tracker.reset();
        self.tracker.add_data_point(event.timestamp_ms, current_handle);
        self.snap_zone.clear();
        self.last_handle = current_handle;
        self.session = Some(GestureSession::new(
            GestureKind::Handle,
            event,
            current_offset,
            current_handle,
        ));
        log::debug!(
            "handle drag began: pointer {} at x={:.1}, handle {:.1}",
            event.id,
            event.x(),
            current_handle
        );
        true
    }

    /// Handle position and matching offset for a move event.
    ///
    /// `None` when no session is open, the event belongs to another pointer,
    /// or the track currently has no usable geometry.
    pub fn update(
        &mut self,
        event: &InputEvent,
        mapping: &HandleMapping,
        snap_points: &SnapPoints,
        snap_threshold: f32,
    ) -> Option<HandleDragUpdate> {
        let session = self.session.as_mut()?;
        if !session.owns(event) || !mapping.is_active() {
            return None;
        }
        let delta = session.displacement(event);
        let raw = mapping.clamp_handle(session.start_handle + delta);
        self.tracker.add_data_point(event.timestamp_ms, raw);

        let snapped_to = snap_points.first_within(raw, mapping.movable_width, snap_threshold);
        let entered_snap_zone = self.snap_zone.observe(snapped_to);
        let handle_position = snapped_to.unwrap_or(raw);
        self.last_handle = handle_position;

        if entered_snap_zone {
            log::debug!("handle snapped to {handle_position:.1}");
        }

        Some(HandleDragUpdate {
            handle_position,
            offset: mapping.handle_to_offset(handle_position),
            snapped_to,
            entered_snap_zone,
        })
    }

    /// Closes the session on release or cancel of the owning pointer.
    /// The release is expressed in handle coordinates.
    pub fn end(&mut self, event: &InputEvent) -> Option<DragRelease> {
        if !self.session.as_ref()?.owns(event) {
            return None;
        }
        let session = self.session.take()?;
        self.snap_zone.clear();
        let release = DragRelease {
            kind: GestureKind::Handle,
            velocity: self.tracker.velocity(),
            distance: session.accumulated_distance,
            position: self.last_handle,
        };
        log::debug!(
            "handle drag ended: distance {:.1}, velocity {:.3}/ms",
            release.distance,
            release.velocity
        );
        Some(release)
    }

    /// Drops any open session without producing a release.
    pub fn abandon(&mut self) {
        self.session = None;
        self.tracker.reset();
        self.snap_zone.clear();
    }
}
