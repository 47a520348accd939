//! Time-based tween animation driven by the frame clock.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use viewfinder_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle, NANOS_PER_MILLI};

/// Easing curves applied to the linear time fraction of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// `1 - (1 - t)^3`: fast start, gentle landing.
    EaseOutCubic,
}

impl Easing {
    /// Apply the easing function to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => fraction,
            Easing::EaseOutCubic => {
                let inverse = 1.0 - fraction;
                1.0 - inverse * inverse * inverse
            }
        }
    }
}

/// Animation specification combining duration and easing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    /// Create an ease-out-cubic tween.
    pub fn ease_out_cubic(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::EaseOutCubic)
    }

    /// Value at `elapsed_millis` for an animation running from `start` to `target`.
    pub fn value_at(&self, start: f32, target: f32, elapsed_millis: f32) -> f32 {
        let duration = self.duration_millis.max(1) as f32;
        let progress = self.easing.transform(elapsed_millis / duration);
        start + (target - start) * progress
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::ease_out_cubic(200)
    }
}

/// State for an active tween.
struct TweenState {
    generation: u64,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    /// Frame-timeline instant progress is measured from.
    start_time_nanos: u64,
    /// Kept alive so the pending frame callback is not cancelled.
    registration: Option<FrameCallbackRegistration>,
    is_running: Cell<bool>,
}

enum FrameStep {
    Continue(f32),
    Finished(f32),
}

/// Drives one value from `start` to `target` over `spec.duration_millis`.
///
/// At most one tween is active per `TweenAnimation`: starting a new one
/// cancels whatever was running.
pub struct TweenAnimation {
    state: Rc<RefCell<Option<TweenState>>>,
    next_generation: Rc<Cell<u64>>,
    frame_clock: FrameClock,
}

impl TweenAnimation {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            state: Rc::new(RefCell::new(None)),
            next_generation: Rc::new(Cell::new(1)),
            frame_clock: runtime.frame_clock(),
        }
    }

    /// Starts a tween whose clock began at `start_time_nanos`.
    ///
    /// `start_time_nanos` is on the frame timeline, usually the moment the
    /// gesture ended, so the first frame already shows the progress made
    /// since then. `on_value` receives the interpolated value once per frame,
    /// including the exact `target` on the final frame. `on_end` runs after
    /// the final frame but never when the tween is cancelled.
    pub fn start<F, G>(
        &self,
        start: f32,
        target: f32,
        spec: AnimationSpec,
        start_time_nanos: u64,
        on_value: F,
        on_end: G,
    ) where
        F: Fn(f32) + 'static,
        G: FnOnce() + 'static,
    {
        self.cancel();

        let generation = self.next_generation.get();
        self.next_generation.set(generation + 1);

        log::debug!(
            "tween #{generation} {start:.2} -> {target:.2} over {}ms",
            spec.duration_millis
        );

        *self.state.borrow_mut() = Some(TweenState {
            generation,
            start,
            target,
            spec,
            start_time_nanos,
            registration: None,
            is_running: Cell::new(true),
        });

        schedule_next_frame(
            self.state.clone(),
            self.frame_clock.clone(),
            generation,
            on_value,
            on_end,
        );
    }

    pub fn cancel(&self) {
        let taken = self.state.borrow_mut().take();
        if let Some(state) = taken {
            log::trace!("tween #{} cancelled", state.generation);
            state.is_running.set(false);
            drop(state.registration);
        }
    }

    /// Returns true if a tween is currently running.
    pub fn is_running(&self) -> bool {
        self.state
            .borrow()
            .as_ref()
            .is_some_and(|s| s.is_running.get())
    }

    /// Target of the running tween, if any.
    pub fn target(&self) -> Option<f32> {
        self.state
            .borrow()
            .as_ref()
            .filter(|s| s.is_running.get())
            .map(|s| s.target)
    }
}

impl std::fmt::Debug for TweenAnimation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TweenAnimation")
            .field("is_running", &self.is_running())
            .field("target", &self.target())
            .finish()
    }
}

fn schedule_next_frame<F, G>(
    state: Rc<RefCell<Option<TweenState>>>,
    frame_clock: FrameClock,
    generation: u64,
    on_value: F,
    on_end: G,
) where
    F: Fn(f32) + 'static,
    G: FnOnce() + 'static,
{
    let state_for_closure = state.clone();
    let frame_clock_for_closure = frame_clock.clone();

    let registration = frame_clock.with_frame_nanos(move |frame_time_nanos| {
        let step = {
            let guard = state_for_closure.borrow();
            let Some(anim) = guard.as_ref() else {
                return;
            };
            // A replaced or cancelled tween may still have a callback in
            // the batch currently being drained.
            if anim.generation != generation || !anim.is_running.get() {
                return;
            }

            let elapsed_nanos = frame_time_nanos.saturating_sub(anim.start_time_nanos);
            let duration_nanos = anim.spec.duration_millis * NANOS_PER_MILLI;

            if elapsed_nanos >= duration_nanos {
                anim.is_running.set(false);
                FrameStep::Finished(anim.target)
            } else {
                let elapsed_millis = elapsed_nanos as f32 / NANOS_PER_MILLI as f32;
                FrameStep::Continue(anim.spec.value_at(anim.start, anim.target, elapsed_millis))
            }
        };

        match step {
            FrameStep::Continue(value) => {
                log::trace!("tween #{generation} frame value {value:.3}");
                on_value(value);
                schedule_next_frame(
                    state_for_closure.clone(),
                    frame_clock_for_closure.clone(),
                    generation,
                    on_value,
                    on_end,
                );
            }
            FrameStep::Finished(target) => {
                on_value(target);
                let finished = {
                    let mut guard = state_for_closure.borrow_mut();
                    let same = guard.as_ref().is_some_and(|s| s.generation == generation);
                    if same {
                        guard.take();
                    }
                    same
                };
                if finished {
                    log::trace!("tween #{generation} finished at {target:.3}");
                    on_end();
                }
            }
        }
    });

    let mut guard = state.borrow_mut();
    if let Some(anim) = guard.as_mut() {
        if anim.generation == generation {
            anim.registration = Some(registration);
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
