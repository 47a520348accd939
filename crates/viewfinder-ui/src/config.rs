use viewfinder_animation::{AnimationSpec, InertiaCalculator};
use viewfinder_foundation::gesture_constants::{
    DRAG_SUPPRESSION_MS, HANDLE_WIDTH_FRACTION, LIVE_SNAP_THRESHOLD, MIN_DRAG_DISTANCE,
    RELEASE_SNAP_THRESHOLD, VELOCITY_HORIZON_MS,
};
use viewfinder_foundation::SnapPoints;

/// Tuning knobs for the pan engine.
///
/// The defaults reproduce the tuned behavior; every constant is exposed so
/// hosts can adjust feel without touching the physics.
#[derive(Debug, Clone, PartialEq)]
pub struct PanConfig {
    /// Release coasting physics.
    pub inertia: InertiaCalculator,
    pub velocity_horizon_ms: u64,
    /// Drags at or below this distance do not raise drag suppression.
    pub min_drag_distance: f32,
    /// Default window for [`crate::PanManager::was_recently_dragging`].
    pub drag_suppression_ms: u64,
    pub live_snap_threshold: f32,
    pub release_snap_threshold: f32,
    pub snap_points: SnapPoints,
    /// Used by animated `set_offset` and `reset`.
    pub programmatic_animation: AnimationSpec,
    /// Handle width published to the host as a fraction of the track.
    pub handle_width_fraction: f32,
}

impl PanConfig {
    pub fn with_inertia(mut self, inertia: InertiaCalculator) -> Self {
        self.inertia = inertia;
        self
    }

    pub fn with_velocity_horizon_ms(mut self, horizon_ms: u64) -> Self {
        self.velocity_horizon_ms = horizon_ms;
        self
    }

    pub fn with_min_drag_distance(mut self, distance: f32) -> Self {
        self.min_drag_distance = distance;
        self
    }

    pub fn with_drag_suppression_ms(mut self, window_ms: u64) -> Self {
        self.drag_suppression_ms = window_ms;
        self
    }

    pub fn with_snap_thresholds(mut self, live: f32, release: f32) -> Self {
        self.live_snap_threshold = live;
        self.release_snap_threshold = release;
        self
    }

    pub fn with_snap_points(mut self, snap_points: SnapPoints) -> Self {
        self.snap_points = snap_points;
        self
    }

    pub fn with_programmatic_animation(mut self, spec: AnimationSpec) -> Self {
        self.programmatic_animation = spec;
        self
    }

    pub fn with_handle_width_fraction(mut self, fraction: f32) -> Self {
        self.handle_width_fraction = fraction;
        self
    }
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            inertia: InertiaCalculator::default(),
            velocity_horizon_ms: VELOCITY_HORIZON_MS,
            min_drag_distance: MIN_DRAG_DISTANCE,
            drag_suppression_ms: DRAG_SUPPRESSION_MS,
            live_snap_threshold: LIVE_SNAP_THRESHOLD,
            release_snap_threshold: RELEASE_SNAP_THRESHOLD,
            snap_points: SnapPoints::default(),
            programmatic_animation: AnimationSpec::ease_out_cubic(200),
            handle_width_fraction: HANDLE_WIDTH_FRACTION,
        }
    }
}
