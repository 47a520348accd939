//! Core runtime for Viewfinder.
//!
//! The runtime owns a queue of one-shot frame callbacks. Hosts call
//! [`RuntimeHandle::drain_frame_callbacks`] once per display frame; anything
//! that needs to keep animating re-registers itself from inside its callback.

mod frame_clock;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use platform::{Clock, DefaultScheduler, RuntimeScheduler, SystemClock};
pub use runtime::{Runtime, RuntimeHandle};

/// Identifier handed out for every registered frame callback.
pub type FrameCallbackId = u64;

/// Nanoseconds in one millisecond, for converting frame times.
pub const NANOS_PER_MILLI: u64 = 1_000_000;

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
