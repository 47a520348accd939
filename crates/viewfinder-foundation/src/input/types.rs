use viewfinder_ui_graphics::Point;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Toolkit-neutral pointer event delivered by the host.
///
/// Only the horizontal component of `position` matters to the pan engine.
/// `timestamp_ms` must share a timeline with the clock the host hands to
/// the pan manager.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputEvent {
    pub id: PointerId,
    pub kind: InputEventKind,
    pub position: Point,
    pub timestamp_ms: u64,
    /// False for secondary touches and non-primary mouse buttons.
    pub is_primary: bool,
}

impl InputEvent {
    pub fn new(id: PointerId, kind: InputEventKind, x: f32, timestamp_ms: u64) -> Self {
        Self {
            id,
            kind,
            position: Point::new(x, 0.0),
            timestamp_ms,
            is_primary: true,
        }
    }

    pub fn down(id: PointerId, x: f32, timestamp_ms: u64) -> Self {
        Self::new(id, InputEventKind::Down, x, timestamp_ms)
    }

    pub fn moved(id: PointerId, x: f32, timestamp_ms: u64) -> Self {
        Self::new(id, InputEventKind::Move, x, timestamp_ms)
    }

    pub fn up(id: PointerId, x: f32, timestamp_ms: u64) -> Self {
        Self::new(id, InputEventKind::Up, x, timestamp_ms)
    }

    pub fn cancel(id: PointerId, x: f32, timestamp_ms: u64) -> Self {
        Self::new(id, InputEventKind::Cancel, x, timestamp_ms)
    }

    pub fn with_primary(mut self, is_primary: bool) -> Self {
        self.is_primary = is_primary;
        self
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// True for the events that close a gesture.
    pub fn is_release(&self) -> bool {
        matches!(self.kind, InputEventKind::Up | InputEventKind::Cancel)
    }
}
