/// What the pan manager is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanPhase {
    #[default]
    Idle,
    ContentDragging,
    HandleDragging,
    Settling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    Grab,
    Grabbing,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandleRender {
    /// Distance from the start of the track.
    pub position: f32,
    pub width_fraction: f32,
    /// False when there is nothing to pan.
    pub enabled: bool,
    /// True when the handle rests at the middle of the track because
    /// panning is disabled.
    pub centered: bool,
    pub cursor: CursorHint,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanSnapshot {
    /// Horizontal translation of the surface from its centered position.
    pub offset: f32,
    pub handle: HandleRender,
    pub surface_cursor: CursorHint,
    pub phase: PanPhase,
}
