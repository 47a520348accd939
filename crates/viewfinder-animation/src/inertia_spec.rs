//! Closed-form inertia for drag releases.
//!
//! A release velocity `v` (units per millisecond) under constant
//! deceleration `a` travels `v² / 2a` before stopping. The settle animation
//! does not integrate that motion; it tweens straight to the resting point
//! over a duration derived from the time-to-stop, capped so a hard throw
//! never feels sluggish.

/// Information about a release that warrants a settle animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaInfo {
    /// Release velocity in units/ms.
    pub initial_velocity: f32,
    /// Signed distance the content coasts before stopping.
    pub distance: f32,
    /// Settle duration in milliseconds.
    pub duration_millis: u64,
}

impl InertiaInfo {
    /// Resting point for a release at `initial_value`, clamped to `[min, max]`.
    pub fn target(&self, initial_value: f32, min: f32, max: f32) -> f32 {
        (initial_value + self.distance).clamp(min, max)
    }
}

/// Calculator for release inertia.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaCalculator {
    /// Deceleration in units/ms².
    pub deceleration: f32,
    /// Releases slower than this (units/ms) do not coast at all.
    pub velocity_epsilon: f32,
    /// Scale applied to the physical time-to-stop.
    pub duration_factor: f32,
    /// Upper bound on the settle duration.
    pub max_duration_millis: u64,
}

impl InertiaCalculator {
    pub const DEFAULT_DECELERATION: f32 = 0.002;
    pub const DEFAULT_VELOCITY_EPSILON: f32 = 0.1;
    pub const DEFAULT_DURATION_FACTOR: f32 = 0.8;
    pub const DEFAULT_MAX_DURATION_MILLIS: u64 = 400;

    pub fn new(deceleration: f32) -> Self {
        Self {
            deceleration,
            ..Self::default()
        }
    }

    pub fn with_velocity_epsilon(mut self, velocity_epsilon: f32) -> Self {
        self.velocity_epsilon = velocity_epsilon;
        self
    }

    pub fn with_duration_factor(mut self, duration_factor: f32) -> Self {
        self.duration_factor = duration_factor;
        self
    }

    pub fn with_max_duration_millis(mut self, max_duration_millis: u64) -> Self {
        self.max_duration_millis = max_duration_millis;
        self
    }

    /// Whether a release at `velocity` should coast.
    pub fn should_coast(&self, velocity: f32) -> bool {
        velocity.is_finite() && self.deceleration > 0.0 && velocity.abs() >= self.velocity_epsilon
    }

    /// Signed coasting distance: `v² / (2·decel) · sign(v)`.
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        if self.deceleration <= 0.0 || velocity == 0.0 {
            return 0.0;
        }
        (velocity * velocity) / (2.0 * self.deceleration) * velocity.signum()
    }

    /// Settle duration: `min(|v / decel| · factor, max)` in milliseconds.
    pub fn fling_duration_millis(&self, velocity: f32) -> u64 {
        if self.deceleration <= 0.0 {
            return 0;
        }
        let physical = (velocity / self.deceleration).abs() * self.duration_factor;
        let capped = physical.min(self.max_duration_millis as f32);
        // `capped` is finite and non-negative here.
        capped.round() as u64
    }

    /// Complete inertia description, or `None` if the release is too slow.
    pub fn fling_info(&self, velocity: f32) -> Option<InertiaInfo> {
        if !self.should_coast(velocity) {
            return None;
        }
        Some(InertiaInfo {
            initial_velocity: velocity,
            distance: self.fling_distance(velocity),
            duration_millis: self.fling_duration_millis(velocity),
        })
    }
}

impl Default for InertiaCalculator {
    fn default() -> Self {
        Self {
            deceleration: Self::DEFAULT_DECELERATION,
            velocity_epsilon: Self::DEFAULT_VELOCITY_EPSILON,
            duration_factor: Self::DEFAULT_DURATION_FACTOR,
            max_duration_millis: Self::DEFAULT_MAX_DURATION_MILLIS,
        }
    }
}
