//! Dragging the content surface directly.

use crate::constraints::PanConstraints;
use crate::input::gestures::session::{DragRelease, GestureKind, GestureSession};
use crate::input::types::InputEvent;
use crate::velocity_tracker::VelocityTracker1D;

/// Moves the content one-to-one with the pointer.
#[derive(Debug, Clone, Default)]
pub struct ContentDragController {
    session: Option<GestureSession>,
    tracker: VelocityTracker1D,
}

impl ContentDragController {
    pub fn new(velocity_horizon_ms: u64) -> Self {
        Self {
            session: None,
            tracker: VelocityTracker1D::with_horizon(velocity_horizon_ms),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Opens a session for a primary press. Rejected while panning is
    /// disabled or a session is already open.
    pub fn begin(
        &mut self,
        event: &InputEvent,
        current_offset: f32,
        current_handle: f32,
        constraints: &PanConstraints,
    ) -> bool {
        if !constraints.is_enabled() || !event.is_primary || self.session.is_some() {
            return false;
        }
        self.tracker.reset();
        self.tracker.add_data_point(event.timestamp_ms, event.x());
        self.session = Some(GestureSession::new(
            GestureKind::Content,
            event,
            current_offset,
            current_handle,
        ));
        log::debug!(
            "content drag began: pointer {} at x={:.1}, offset {:.1}",
            event.id,
            event.x(),
            current_offset
        );
        true
    }

    /// New offset for a move event, clamped to `constraints`.
    ///
    /// `None` when no session is open or the event belongs to another pointer.
    pub fn update(&mut self, event: &InputEvent, constraints: &PanConstraints) -> Option<f32> {
        let session = self.session.as_mut()?;
        if !session.owns(event) {
            return None;
        }
        let delta = session.displacement(event);
        let offset = constraints.clamp(session.start_offset + delta);
        self.tracker.add_data_point(event.timestamp_ms, event.x());
        log::trace!("content drag delta {delta:.1} -> offset {offset:.1}");
        Some(offset)
    }

    /// Closes the session on release or cancel of the owning pointer.
    pub fn end(&mut self, event: &InputEvent, final_offset: f32) -> Option<DragRelease> {
        if !self.session.as_ref()?.owns(event) {
            return None;
        }
        let session = self.session.take()?;
        let release = DragRelease {
            kind: GestureKind::Content,
            velocity: self.tracker.velocity(),
            distance: session.accumulated_distance,
            position: final_offset,
        };
        log::debug!(
            "content drag ended: distance {:.1}, velocity {:.3}/ms",
            release.distance,
            release.velocity
        );
        Some(release)
    }

    /// Drops any open session without producing a release.
    pub fn abandon(&mut self) {
        self.session = None;
        self.tracker.reset();
    }
}
