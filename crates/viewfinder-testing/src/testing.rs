use std::rc::Rc;
use std::sync::Arc;

use viewfinder_core::{DefaultScheduler, Runtime, RuntimeHandle, NANOS_PER_MILLI};
use viewfinder_foundation::{InputEvent, InputEventKind, PointerId};
use viewfinder_ui::{PanConfig, PanManager, PanPhase, PanSnapshot};

use crate::fakes::{ManualClock, RecordingHaptics, ScriptedGeometry};

/// One display frame at 60Hz.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

/// Headless harness for exercising a [`PanManager`] in tests.
///
/// `PanTestRule` owns the runtime, a scripted geometry host, a manual clock
/// and a recording haptic sink. The clock and the frame timeline advance
/// together, so suppression windows and settle animations see the same time.
pub struct PanTestRule {
    runtime: Runtime,
    geometry: Rc<ScriptedGeometry>,
    clock: Rc<ManualClock>,
    haptics: Rc<RecordingHaptics>,
    manager: PanManager,
    frame_time_nanos: u64,
    next_pointer: PointerId,
}

impl PanTestRule {
    pub fn new(geometry: ScriptedGeometry) -> Self {
        Self::with_config(geometry, PanConfig::default())
    }

    pub fn with_config(geometry: ScriptedGeometry, config: PanConfig) -> Self {
        let runtime = Runtime::new(Arc::new(DefaultScheduler));
        let geometry = Rc::new(geometry);
        let clock = Rc::new(ManualClock::new(0));
        let haptics = Rc::new(RecordingHaptics::new());
        let manager =
            PanManager::with_config(runtime.handle(), geometry.clone(), clock.clone(), config)
                .with_haptics(haptics.clone());
        Self {
            runtime,
            geometry,
            clock,
            haptics,
            manager,
            frame_time_nanos: 0,
            next_pointer: 1,
        }
    }

    pub fn manager(&self) -> &PanManager {
        &self.manager
    }

    pub fn geometry(&self) -> &ScriptedGeometry {
        &self.geometry
    }

    pub fn haptics(&self) -> &RecordingHaptics {
        &self.haptics
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn now_millis(&self) -> u64 {
        self.frame_time_nanos / NANOS_PER_MILLI
    }

    pub fn render(&self) -> PanSnapshot {
        self.manager.render()
    }

    /// Moves time forward without producing a frame, as happens between
    /// input events.
    pub fn advance_clock(&mut self, millis: u64) {
        self.frame_time_nanos += millis * NANOS_PER_MILLI;
        self.clock.set(self.now_millis());
    }

    /// Produces one frame, draining any scheduled frame callbacks.
    pub fn advance_frame(&mut self) {
        self.frame_time_nanos += FRAME_INTERVAL_NANOS;
        self.clock.set(self.now_millis());
        self.runtime
            .handle()
            .drain_frame_callbacks(self.frame_time_nanos);
    }

    /// Produces frames until at least `millis` have passed.
    pub fn advance_time(&mut self, millis: u64) {
        let until = self.frame_time_nanos + millis * NANOS_PER_MILLI;
        while self.frame_time_nanos < until {
            self.advance_frame();
        }
    }

    /// Produces frames until no settle animation is running and returns how
    /// many frames that took.
    pub fn pump_until_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.manager.phase() == PanPhase::Settling {
            frames += 1;
            if frames > 1_000 {
                panic!("pump_until_idle: settle animation never finished");
            }
            self.advance_frame();
        }
        frames
    }

    fn event(&self, id: PointerId, kind: InputEventKind, x: f32) -> InputEvent {
        InputEvent::new(id, kind, x, self.now_millis())
    }

    fn allocate_pointer(&mut self) -> PointerId {
        let id = self.next_pointer;
        self.next_pointer += 1;
        id
    }

    /// Sends one event to the content surface at the current time.
    pub fn send_content(&mut self, id: PointerId, kind: InputEventKind, x: f32) -> bool {
        let event = self.event(id, kind, x);
        self.manager.on_content_input(&event)
    }

    /// Sends one event to the handle at the current time.
    pub fn send_handle(&mut self, id: PointerId, kind: InputEventKind, x: f32) -> bool {
        let event = self.event(id, kind, x);
        self.manager.on_handle_input(&event)
    }

    /// Drags across the content surface with a fresh pointer: a press at
    /// `from_x`, `steps` evenly spaced moves reaching `to_x` over
    /// `duration_ms`, then a release. Returns whether the press was accepted.
    pub fn drag_content(&mut self, from_x: f32, to_x: f32, steps: u32, duration_ms: u64) -> bool {
        let id = self.allocate_pointer();
        self.drag(id, from_x, to_x, steps, duration_ms, Self::send_content)
    }

    /// Like [`PanTestRule::drag_content`] but on the handle.
    pub fn drag_handle(&mut self, from_x: f32, to_x: f32, steps: u32, duration_ms: u64) -> bool {
        let id = self.allocate_pointer();
        self.drag(id, from_x, to_x, steps, duration_ms, Self::send_handle)
    }

    fn drag(
        &mut self,
        id: PointerId,
        from_x: f32,
        to_x: f32,
        steps: u32,
        duration_ms: u64,
        send: fn(&mut Self, PointerId, InputEventKind, f32) -> bool,
    ) -> bool {
        if !send(self, id, InputEventKind::Down, from_x) {
            return false;
        }
        let steps = steps.max(1);
        let step_ms = duration_ms / u64::from(steps);
        for step in 1..=steps {
            self.advance_clock(step_ms);
            let fraction = step as f32 / steps as f32;
            send(self, id, InputEventKind::Move, from_x + (to_x - from_x) * fraction);
        }
        send(self, id, InputEventKind::Up, to_x);
        true
    }
}

impl Default for PanTestRule {
    fn default() -> Self {
        Self::new(ScriptedGeometry::landscape())
    }
}
