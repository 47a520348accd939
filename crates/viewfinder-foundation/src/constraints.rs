//! Legal offset range derived from surface, viewport and track geometry.

use viewfinder_ui_graphics::Size;

/// Geometry of the oversized content surface as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceGeometry {
    /// Intrinsic, unscaled size of the content.
    pub natural: Size,
    /// Size the content currently occupies on screen.
    pub rendered: Size,
}

impl SurfaceGeometry {
    pub fn new(natural: Size, rendered: Size) -> Self {
        Self { natural, rendered }
    }

    /// Rendered scale derived from on-screen height versus natural height.
    pub fn scale(&self) -> Option<f32> {
        if !(self.natural.height > 0.0) {
            return None;
        }
        let scale = self.rendered.height / self.natural.height;
        (scale.is_finite() && scale > 0.0).then_some(scale)
    }
}

/// Geometry of the handle and the track it slides in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub track_width: f32,
    pub handle_width: f32,
}

impl TrackGeometry {
    pub fn new(track_width: f32, handle_width: f32) -> Self {
        Self {
            track_width,
            handle_width,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.track_width > 0.0 && self.handle_width > 0.0
    }

    /// Distance the handle can travel: `track_width - handle_width`.
    pub fn movable_width(&self) -> f32 {
        if !self.is_valid() {
            return 0.0;
        }
        (self.track_width - self.handle_width).max(0.0)
    }
}

/// Bounds for the content offset.
///
/// `offset` must always lie in `[-max_offset, max_offset]`; a zero
/// `max_offset` means panning is disabled and the content stays centered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanConstraints {
    pub max_offset: f32,
    pub scale: f32,
}

impl PanConstraints {
    pub const DISABLED: PanConstraints = PanConstraints {
        max_offset: 0.0,
        scale: 1.0,
    };

    /// Computes constraints for the given geometry.
    ///
    /// Any non-positive natural size, rendered scale or viewport size yields
    /// [`PanConstraints::DISABLED`]. Otherwise `max_offset` is half of the
    /// rendered width overflowing the viewport.
    pub fn resolve(surface: &SurfaceGeometry, viewport: Size) -> Self {
        if !surface.natural.is_positive() || !viewport.is_positive() {
            return Self::DISABLED;
        }
        let Some(scale) = surface.scale() else {
            return Self::DISABLED;
        };
        let overflow = (surface.rendered.width - viewport.width).max(0.0);
        if !overflow.is_finite() {
            return Self::DISABLED;
        }
        Self {
            max_offset: overflow / 2.0,
            scale,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.max_offset > 0.0
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        if !self.is_enabled() || !offset.is_finite() {
            return 0.0;
        }
        offset.clamp(-self.max_offset, self.max_offset)
    }
}

impl Default for PanConstraints {
    fn default() -> Self {
        Self::DISABLED
    }
}
