//! Drag gesture controllers for the content surface and the handle.
//!
//! Each controller owns at most one [`GestureSession`]. Keeping the two
//! controllers mutually exclusive is the orchestrator's job.

pub mod content_drag;
pub mod handle_drag;
pub mod session;
pub mod suppression;

pub use content_drag::ContentDragController;
pub use handle_drag::{HandleDragController, HandleDragUpdate};
pub use session::{DragRelease, GestureKind, GestureSession};
pub use suppression::DragSuppression;

#[cfg(test)]
#[path = "../../tests/gesture_tests.rs"]
mod tests;
