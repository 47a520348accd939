use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct CountingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn frame_callbacks_fire_in_registration_order() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    for label in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        handle.register_frame_callback(move |_| order.borrow_mut().push(label));
    }

    handle.drain_frame_callbacks(42);
    assert_eq!(order.borrow().as_slice(), &["first", "second", "third"]);
    assert!(!runtime.needs_frame());
}

#[test]
fn callbacks_receive_frame_time() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.handle().frame_clock();
    let seen = Rc::new(Cell::new(0u64));

    let seen_clone = Rc::clone(&seen);
    let _nanos = clock.with_frame_nanos(move |t| seen_clone.set(t));

    runtime.handle().drain_frame_callbacks(33 * NANOS_PER_MILLI);
    assert_eq!(seen.get(), 33 * NANOS_PER_MILLI);
}

#[test]
fn cancelling_frame_callback_prevents_execution() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.handle().frame_clock();
    let fired = Rc::new(Cell::new(false));
    let fired_clone = Rc::clone(&fired);

    let registration = clock.with_frame_nanos(move |_| fired_clone.set(true));
    assert!(registration.is_active());
    registration.cancel();

    runtime.handle().drain_frame_callbacks(84);
    assert!(!fired.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.handle().frame_clock();
    let fired = Rc::new(Cell::new(false));
    let fired_clone = Rc::clone(&fired);

    drop(clock.with_frame_nanos(move |_| fired_clone.set(true)));

    runtime.handle().drain_frame_callbacks(1);
    assert!(!fired.get());
}

#[test]
fn callbacks_registered_during_drain_run_next_frame() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));

    let frames_outer = Rc::clone(&frames);
    let handle_inner = handle.clone();
    handle.register_frame_callback(move |t| {
        frames_outer.borrow_mut().push(t);
        let frames_inner = Rc::clone(&frames_outer);
        handle_inner.register_frame_callback(move |t| frames_inner.borrow_mut().push(t));
    });

    handle.drain_frame_callbacks(100);
    assert_eq!(frames.borrow().as_slice(), &[100]);
    assert!(runtime.needs_frame());

    handle.drain_frame_callbacks(200);
    assert_eq!(frames.borrow().as_slice(), &[100, 200]);
    assert!(!runtime.needs_frame());
}

#[test]
fn registering_asks_scheduler_for_a_frame() {
    let scheduler = Arc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    runtime.handle().register_frame_callback(|_| {});
    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 1);
    assert!(runtime.needs_frame());
}

#[test]
fn dead_runtime_hands_out_inactive_registrations() {
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let clock = runtime.handle().frame_clock();
    drop(runtime);

    let registration = clock.with_frame_nanos(|_| {});
    assert!(!registration.is_active());
    assert!(!clock.runtime_handle().has_frame_callbacks());
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let first = clock.now_millis();
    let second = clock.now_millis();
    assert!(second >= first);
    assert_eq!(clock.elapsed_millis(u64::MAX), 0);
}
