//! Foundation pieces of the pan engine.
//!
//! Nothing in this crate schedules frames or talks to a host. It turns input
//! events into offsets, keeps the content offset and the handle position in
//! agreement, and decides what range panning may cover.

pub mod constraints;
pub mod coordinate_mapper;
pub mod gesture_constants;
pub mod input;
pub mod snap;
pub mod velocity_tracker;

pub use constraints::{PanConstraints, SurfaceGeometry, TrackGeometry};
pub use coordinate_mapper::{handle_to_offset, offset_to_handle, HandleMapping};
pub use input::gestures::{
    ContentDragController, DragRelease, DragSuppression, GestureKind, GestureSession,
    HandleDragController, HandleDragUpdate,
};
pub use input::types::{InputEvent, InputEventKind, PointerId};
pub use snap::{SnapPoints, SnapZoneTracker};
pub use velocity_tracker::VelocityTracker1D;
pub use viewfinder_ui_graphics::{Point, Size};
