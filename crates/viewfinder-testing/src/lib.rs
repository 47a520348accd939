//! Testing utilities and harness for Viewfinder

pub mod fakes;
pub mod testing;

pub use fakes::{ManualClock, RecordingHaptics, ScriptedGeometry};
pub use testing::*;

pub mod prelude {
    pub use crate::fakes::{ManualClock, RecordingHaptics, ScriptedGeometry};
    pub use crate::testing::*;
}
