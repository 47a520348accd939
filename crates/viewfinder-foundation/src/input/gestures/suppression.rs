//! Short window after a real drag during which taps are ignored.

use crate::gesture_constants::MIN_DRAG_DISTANCE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSuppression {
    min_distance: f32,
    raised_at_ms: Option<u64>,
}

impl DragSuppression {
    pub fn new(min_distance: f32) -> Self {
        Self {
            min_distance,
            raised_at_ms: None,
        }
    }

    /// Records the end of a drag. Raises the flag when the drag moved
    /// further than the minimum distance, clears it otherwise.
    pub fn record_release(&mut self, distance: f32, now_ms: u64) -> bool {
        if distance > self.min_distance {
            self.raised_at_ms = Some(now_ms);
            true
        } else {
            self.raised_at_ms = None;
            false
        }
    }

    /// True while the flag is raised and younger than `threshold_ms`.
    /// An expired flag is cleared.
    pub fn is_active(&mut self, now_ms: u64, threshold_ms: u64) -> bool {
        let Some(raised_at) = self.raised_at_ms else {
            return false;
        };
        if now_ms.saturating_sub(raised_at) > threshold_ms {
            self.raised_at_ms = None;
            return false;
        }
        true
    }

    pub fn is_raised(&self) -> bool {
        self.raised_at_ms.is_some()
    }

    pub fn clear(&mut self) {
        self.raised_at_ms = None;
    }
}

impl Default for DragSuppression {
    fn default() -> Self {
        Self::new(MIN_DRAG_DISTANCE)
    }
}
