use std::cell::Cell;

use viewfinder_core::Clock;
use viewfinder_foundation::{SurfaceGeometry, TrackGeometry};
use viewfinder_ui::{GeometryError, GeometrySource, HapticPulse, HapticSink};
use viewfinder_ui_graphics::Size;

/// Stands in for a window: a photo shown at screen height inside a phone-sized
/// viewport, with a scrubber track underneath.
pub struct DemoHost {
    surface: Cell<SurfaceGeometry>,
    viewport: Cell<Size>,
    track: Cell<Option<TrackGeometry>>,
}

impl DemoHost {
    pub fn new() -> Self {
        let natural = Size::new(4000.0, 3000.0);
        let rendered = Size::new(1600.0, 1200.0);
        Self {
            surface: Cell::new(SurfaceGeometry::new(natural, rendered)),
            viewport: Cell::new(Size::new(800.0, 1200.0)),
            track: Cell::new(Some(TrackGeometry::new(800.0, 240.0))),
        }
    }

    /// Rotates the device: the viewport swaps its sides and the photo is
    /// rescaled to the new height.
    pub fn rotate(&self) {
        let viewport = self.viewport.get();
        let rotated = Size::new(viewport.height, viewport.width);
        let mut surface = self.surface.get();
        let scale = rotated.height / surface.natural.height;
        surface.rendered = Size::new(surface.natural.width * scale, rotated.height);
        self.viewport.set(rotated);
        self.surface.set(surface);
        self.track
            .set(Some(TrackGeometry::new(rotated.width, rotated.width * 0.3)));
    }
}

impl Default for DemoHost {
    fn default() -> Self {
        Self::new()
    }
}

impl GeometrySource for DemoHost {
    fn viewport(&self) -> Result<Size, GeometryError> {
        Ok(self.viewport.get())
    }

    fn surface(&self) -> Result<SurfaceGeometry, GeometryError> {
        Ok(self.surface.get())
    }

    fn handle_track(&self) -> Result<TrackGeometry, GeometryError> {
        self.track.get().ok_or(GeometryError::MissingHandleTrack)
    }
}

/// Prints pulses instead of vibrating.
pub struct ConsoleHaptics;

impl HapticSink for ConsoleHaptics {
    fn pulse(&self, pulse: HapticPulse) {
        println!("  ~ haptic {pulse:?} ({}ms)", pulse.duration_millis());
    }
}

/// Time source driven by the replay loop.
#[derive(Default)]
pub struct ReplayClock {
    now_millis: Cell<u64>,
}

impl ReplayClock {
    pub fn set(&self, millis: u64) {
        self.now_millis.set(millis);
    }
}

impl Clock for ReplayClock {
    fn now_millis(&self) -> u64 {
        self.now_millis.get()
    }
}
