//! Platform abstraction traits for runtime services.
//!
//! These traits let the host decide how frames get scheduled and where time
//! comes from, so the pan engine never talks to a concrete windowing or
//! browser API.

use web_time::Instant;

/// Schedules work for the runtime.
///
/// Implementations are responsible for asking the host to produce a frame,
/// after which the host drains the runtime's frame callbacks.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler for hosts that poll [`crate::RuntimeHandle::needs_frame`] instead
/// of being woken.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

/// Provides the current time on the same millisecond timeline as input
/// event timestamps.
pub trait Clock {
    /// Milliseconds elapsed on a monotonic timeline.
    fn now_millis(&self) -> u64;

    /// Milliseconds elapsed since `since`, saturating at zero.
    fn elapsed_millis(&self, since: u64) -> u64 {
        self.now_millis().saturating_sub(since)
    }
}

/// Monotonic wall clock measured from the moment it was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        let elapsed = self.origin.elapsed().as_millis();
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }
}
