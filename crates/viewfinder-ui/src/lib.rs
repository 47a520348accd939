//! Horizontal pan engine for an oversized surface inside a fixed viewport.
//!
//! [`PanManager`] owns the offset, the handle position, both drag controllers
//! and the settle animation. Hosts feed it input and geometry notifications,
//! drain the runtime's frame callbacks once per frame, and draw whatever
//! [`PanManager::render`] returns.

mod config;
mod host;
mod pan_manager;
mod render_state;
mod settle;

pub use config::PanConfig;
pub use host::{GeometryError, GeometryEvent, GeometrySource, HapticPulse, HapticSink};
pub use pan_manager::PanManager;
pub use render_state::{CursorHint, HandleRender, PanPhase, PanSnapshot};
pub use settle::{plan_release, SettleAxis, SettlePlan};

pub use viewfinder_foundation::{InputEvent, InputEventKind, SurfaceGeometry, TrackGeometry};
pub use viewfinder_ui_graphics::Size;
