//! Scriptable stand-ins for the host collaborators.

use std::cell::{Cell, RefCell};

use viewfinder_core::Clock;
use viewfinder_foundation::{SurfaceGeometry, TrackGeometry};
use viewfinder_ui::{GeometryError, GeometrySource, HapticPulse, HapticSink};
use viewfinder_ui_graphics::Size;

/// Geometry host whose answers can be changed between calls.
///
/// Every read returns the currently scripted value, so a test can simulate a
/// resize by changing a field and sending a geometry notification.
#[derive(Debug)]
pub struct ScriptedGeometry {
    surface: Cell<Result<SurfaceGeometry, GeometryError>>,
    viewport: Cell<Result<Size, GeometryError>>,
    track: Cell<Result<TrackGeometry, GeometryError>>,
    reads: Cell<usize>,
}

impl ScriptedGeometry {
    pub fn new(surface: SurfaceGeometry, viewport: Size, track: TrackGeometry) -> Self {
        Self {
            surface: Cell::new(Ok(surface)),
            viewport: Cell::new(Ok(viewport)),
            track: Cell::new(Ok(track)),
            reads: Cell::new(0),
        }
    }

    /// A 2000x1000 surface shown at natural size in a 1000x600 viewport,
    /// with a 1000 wide track and a 300 wide handle.
    ///
    /// Gives `max_offset = 500` and a movable handle width of 700.
    pub fn landscape() -> Self {
        let surface = Size::new(2000.0, 1000.0);
        Self::new(
            SurfaceGeometry::new(surface, surface),
            Size::new(1000.0, 600.0),
            TrackGeometry::new(1000.0, 300.0),
        )
    }

    pub fn set_surface(&self, surface: SurfaceGeometry) {
        self.surface.set(Ok(surface));
    }

    /// Changes only the rendered width, keeping the rendered height.
    pub fn set_rendered_width(&self, width: f32) {
        let mut surface = self.surface.get().unwrap_or_default();
        surface.rendered.width = width;
        self.surface.set(Ok(surface));
    }

    pub fn set_viewport(&self, viewport: Size) {
        self.viewport.set(Ok(viewport));
    }

    pub fn set_track(&self, track: TrackGeometry) {
        self.track.set(Ok(track));
    }

    pub fn fail_surface(&self, error: GeometryError) {
        self.surface.set(Err(error));
    }

    pub fn fail_viewport(&self, error: GeometryError) {
        self.viewport.set(Err(error));
    }

    pub fn fail_track(&self, error: GeometryError) {
        self.track.set(Err(error));
    }

    /// Total number of geometry reads served.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn count_read(&self) {
        self.reads.set(self.reads.get() + 1);
    }
}

impl Default for ScriptedGeometry {
    fn default() -> Self {
        Self::landscape()
    }
}

impl GeometrySource for ScriptedGeometry {
    fn viewport(&self) -> Result<Size, GeometryError> {
        self.count_read();
        self.viewport.get()
    }

    fn surface(&self) -> Result<SurfaceGeometry, GeometryError> {
        self.count_read();
        self.surface.get()
    }

    fn handle_track(&self) -> Result<TrackGeometry, GeometryError> {
        self.count_read();
        self.track.get()
    }
}

/// Haptic sink that remembers every pulse it receives.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    pulses: RefCell<Vec<HapticPulse>>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pulses(&self) -> Vec<HapticPulse> {
        self.pulses.borrow().clone()
    }

    pub fn count(&self, pulse: HapticPulse) -> usize {
        self.pulses.borrow().iter().filter(|p| **p == pulse).count()
    }

    pub fn clear(&self) {
        self.pulses.borrow_mut().clear();
    }
}

impl HapticSink for RecordingHaptics {
    fn pulse(&self, pulse: HapticPulse) {
        log::trace!("haptic pulse {pulse:?} ({}ms)", pulse.duration_millis());
        self.pulses.borrow_mut().push(pulse);
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_millis: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_millis: u64) -> Self {
        Self {
            now_millis: Cell::new(start_millis),
        }
    }

    pub fn set(&self, millis: u64) {
        self.now_millis.set(millis);
    }

    pub fn advance(&self, millis: u64) {
        self.now_millis.set(self.now_millis.get() + millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now_millis.get()
    }
}
