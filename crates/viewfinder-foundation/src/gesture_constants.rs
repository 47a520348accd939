//! Shared gesture constants for the pan engine.
//!
//! All distances are in logical pixels and all durations in milliseconds.
//! `PanConfig::default()` is built from these values.

/// Only samples this recent, relative to the newest one, feed the velocity.
pub const VELOCITY_HORIZON_MS: u64 = 100;

/// A gesture whose largest displacement stays at or below this distance is a
/// tap, not a drag.
pub const MIN_DRAG_DISTANCE: f32 = 10.0;

/// How long after a qualifying drag a release is still reported as a drag to
/// tap handlers.
pub const DRAG_SUPPRESSION_MS: u64 = 150;

/// Live handle drags lock onto a snap point closer than this.
pub const LIVE_SNAP_THRESHOLD: f32 = 15.0;

/// Post-release snap search radius. Wider than the live radius because the
/// coasting target is only an estimate.
pub const RELEASE_SNAP_THRESHOLD: f32 = 30.0;

/// Snap points as fractions of the handle's movable width.
pub const SNAP_FRACTIONS: [f32; 3] = [0.0, 0.5, 1.0];

/// Handle width as a fraction of its track.
pub const HANDLE_WIDTH_FRACTION: f32 = 0.30;
