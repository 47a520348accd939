//! Velocity tracking for release inertia.
//!
//! Velocity is the slope between the oldest and newest sample inside a short
//! rolling window. Older samples are discarded as new ones arrive.

use smallvec::SmallVec;

use crate::gesture_constants::VELOCITY_HORIZON_MS;

/// Inline capacity; a 100ms window at typical pointer rates fits easily.
const HISTORY_SIZE: usize = 16;

/// A data point with timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct DataPointAtTime {
    time_ms: u64,
    data_point: f32,
}

/// 1D velocity tracker over a rolling time window.
///
/// # Usage
/// ```
/// use viewfinder_foundation::VelocityTracker1D;
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_data_point(0, 0.0);
/// tracker.add_data_point(10, 5.0);
/// assert_eq!(tracker.velocity(), 0.5); // units per millisecond
/// ```
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: SmallVec<[DataPointAtTime; HISTORY_SIZE]>,
    horizon_ms: u64,
    velocity: f32,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self::with_horizon(VELOCITY_HORIZON_MS)
    }

    pub fn with_horizon(horizon_ms: u64) -> Self {
        Self {
            samples: SmallVec::new(),
            horizon_ms,
            velocity: 0.0,
        }
    }

    /// Adds a position sample taken at `time_ms`.
    ///
    /// Samples older than the horizon relative to this one are dropped, but
    /// the newest sample is always kept. The velocity is recomputed whenever
    /// at least two samples span a positive time interval; otherwise the
    /// previous estimate stands.
    pub fn add_data_point(&mut self, time_ms: u64, data_point: f32) {
        self.samples.push(DataPointAtTime {
            time_ms,
            data_point,
        });

        let expired = self
            .samples
            .iter()
            .take(self.samples.len() - 1)
            .take_while(|sample| time_ms.saturating_sub(sample.time_ms) > self.horizon_ms)
            .count();
        if expired > 0 {
            self.samples.drain(..expired);
        }

        if let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) {
            if self.samples.len() >= 2 && last.time_ms > first.time_ms {
                let delta_time = (last.time_ms - first.time_ms) as f32;
                self.velocity = (last.data_point - first.data_point) / delta_time;
            }
        }
    }

    /// Current velocity estimate in units per millisecond.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Clears all tracked data.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.velocity = 0.0;
    }
}
