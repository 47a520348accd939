//! Seams to the host that owns the actual surface, viewport and handle.

use viewfinder_foundation::{SurfaceGeometry, TrackGeometry};
use viewfinder_ui_graphics::Size;

/// Why the host could not report a piece of geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    MissingSurface,
    MissingViewport,
    MissingHandleTrack,
    /// The element exists but is not attached to a laid-out tree.
    Detached { what: &'static str },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::MissingSurface => write!(f, "content surface is missing"),
            GeometryError::MissingViewport => write!(f, "viewport is missing"),
            GeometryError::MissingHandleTrack => write!(f, "handle or its track is missing"),
            GeometryError::Detached { what } => write!(f, "{what} is detached from layout"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Live geometry reads. Called whenever constraints or the handle position
/// need refreshing, so implementations should return current layout values.
pub trait GeometrySource {
    fn viewport(&self) -> Result<Size, GeometryError>;

    fn surface(&self) -> Result<SurfaceGeometry, GeometryError>;

    fn handle_track(&self) -> Result<TrackGeometry, GeometryError>;
}

/// Host notifications that geometry may have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryEvent {
    ContentReady,
    Resize,
    OrientationChange,
}

/// Discrete feedback pulses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPulse {
    /// A drag session was accepted.
    GestureStart,
    /// A live handle drag entered a snap zone.
    SnapEnter,
    /// A handle release was redirected onto a snap point.
    ReleaseSnap,
}

impl HapticPulse {
    pub fn duration_millis(&self) -> u64 {
        match self {
            HapticPulse::GestureStart => 5,
            HapticPulse::SnapEnter => 15,
            HapticPulse::ReleaseSnap => 10,
        }
    }
}

/// Fire-and-forget feedback output, for example a vibration motor.
pub trait HapticSink {
    fn pulse(&self, pulse: HapticPulse);
}
