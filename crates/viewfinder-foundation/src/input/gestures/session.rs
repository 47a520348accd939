use crate::input::types::{InputEvent, PointerId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    Content,
    Handle,
}

/// Live state of one drag, from press to release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSession {
    pub kind: GestureKind,
    pub pointer_id: PointerId,
    /// Pointer x at press.
    pub start_position: f32,
    /// Content offset at press.
    pub start_offset: f32,
    /// Handle position at press.
    pub start_handle: f32,
    /// Largest absolute pointer displacement seen so far.
    pub accumulated_distance: f32,
}

impl GestureSession {
    pub fn new(kind: GestureKind, event: &InputEvent, start_offset: f32, start_handle: f32) -> Self {
        Self {
            kind,
            pointer_id: event.id,
            start_position: event.x(),
            start_offset,
            start_handle,
            accumulated_distance: 0.0,
        }
    }

    /// Pointer displacement since press for `event`, recording its magnitude.
    pub fn displacement(&mut self, event: &InputEvent) -> f32 {
        let delta = event.x() - self.start_position;
        self.accumulated_distance = self.accumulated_distance.max(delta.abs());
        delta
    }

    /// Whether `event` belongs to this session.
    pub fn owns(&self, event: &InputEvent) -> bool {
        event.id == self.pointer_id && event.is_primary
    }
}

/// What a finished drag hands to the settle step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    pub kind: GestureKind,
    /// Release velocity in units/ms, in the space of `kind`.
    pub velocity: f32,
    pub distance: f32,
    /// Final content offset or handle position, in the space of `kind`.
    pub position: f32,
}
