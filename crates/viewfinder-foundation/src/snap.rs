//! Snap points for the handle.

use smallvec::SmallVec;

use crate::gesture_constants::SNAP_FRACTIONS;

/// Canonical handle positions expressed as fractions of the movable width.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapPoints {
    fractions: SmallVec<[f32; 3]>,
}

impl SnapPoints {
    pub fn new(fractions: impl IntoIterator<Item = f32>) -> Self {
        Self {
            fractions: fractions.into_iter().collect(),
        }
    }

    pub fn fractions(&self) -> &[f32] {
        &self.fractions
    }

    /// Candidate positions in track coordinates, in declaration order.
    pub fn candidates(&self, movable_width: f32) -> impl Iterator<Item = f32> + '_ {
        let movable_width = movable_width.max(0.0);
        self.fractions.iter().map(move |f| f * movable_width)
    }

    /// First candidate strictly closer than `threshold` to `position`.
    pub fn first_within(&self, position: f32, movable_width: f32, threshold: f32) -> Option<f32> {
        self.candidates(movable_width)
            .find(|candidate| (position - candidate).abs() < threshold)
    }

    /// Nearest candidate strictly closer than `threshold` to `position`.
    pub fn nearest_within(&self, position: f32, movable_width: f32, threshold: f32) -> Option<f32> {
        self.candidates(movable_width)
            .map(|candidate| (candidate, (position - candidate).abs()))
            .filter(|(_, distance)| *distance < threshold)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(candidate, _)| candidate)
    }
}

impl Default for SnapPoints {
    fn default() -> Self {
        Self::new(SNAP_FRACTIONS)
    }
}

/// Remembers which snap zone a live drag is inside so feedback fires once
/// per entry.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SnapZoneTracker {
    last_snap_position: Option<f32>,
}

impl SnapZoneTracker {
    /// Records the zone for this move. Returns true on entering a zone that
    /// differs from the previous one.
    pub fn observe(&mut self, snapped_to: Option<f32>) -> bool {
        match snapped_to {
            Some(position) => {
                let entered = self.last_snap_position != Some(position);
                self.last_snap_position = Some(position);
                entered
            }
            None => {
                self.last_snap_position = None;
                false
            }
        }
    }

    pub fn last_snap_position(&self) -> Option<f32> {
        self.last_snap_position
    }

    pub fn clear(&mut self) {
        self.last_snap_position = None;
    }
}
