//! The pan manager: single owner of offset, handle position and gesture state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use viewfinder_animation::TweenAnimation;
use viewfinder_core::{Clock, RuntimeHandle, NANOS_PER_MILLI};
use viewfinder_foundation::{
    ContentDragController, DragRelease, DragSuppression, HandleDragController, HandleMapping,
    InputEvent, InputEventKind, PanConstraints, SurfaceGeometry, TrackGeometry,
};
use viewfinder_ui_graphics::Size;

use crate::render_state::{CursorHint, HandleRender, PanPhase, PanSnapshot};
use crate::settle::{plan_release, SettleAxis, SettlePlan};
use crate::{GeometryError, GeometryEvent, GeometrySource, HapticPulse, HapticSink, PanConfig};

struct PanState {
    config: PanConfig,
    host: Rc<dyn GeometrySource>,
    clock: Rc<dyn Clock>,
    constraints: PanConstraints,
    offset: f32,
    handle_position: f32,
    content_drag: ContentDragController,
    handle_drag: HandleDragController,
    suppression: DragSuppression,
    destroyed: bool,
}

impl PanState {
    fn read_constraints(&self) -> Result<PanConstraints, GeometryError> {
        let surface: SurfaceGeometry = self.host.surface()?;
        let viewport: Size = self.host.viewport()?;
        Ok(PanConstraints::resolve(&surface, viewport))
    }

    fn read_track(&self) -> Option<TrackGeometry> {
        match self.host.handle_track() {
            Ok(track) if track.is_valid() => Some(track),
            Ok(track) => {
                log::warn!("handle track has no usable geometry: {track:?}");
                None
            }
            Err(err) => {
                log::warn!("handle position will not update: {err}");
                None
            }
        }
    }

    fn mapping(&self, track: Option<TrackGeometry>) -> HandleMapping {
        HandleMapping::new(
            self.constraints.max_offset,
            track.map_or(0.0, |t| t.movable_width()),
        )
    }

    fn update_constraints(&mut self) -> bool {
        self.constraints = match self.read_constraints() {
            Ok(constraints) => constraints,
            Err(err) => {
                log::warn!("panning disabled: {err}");
                PanConstraints::DISABLED
            }
        };
        let offset = self.offset;
        self.apply_offset(offset);
        let enabled = self.constraints.is_enabled();
        log::debug!(
            "constraints updated: max_offset {:.1}, scale {:.3}, enabled {enabled}",
            self.constraints.max_offset,
            self.constraints.scale
        );
        enabled
    }

    /// Clamps and stores `offset`, then derives the handle position from it.
    fn apply_offset(&mut self, offset: f32) {
        self.offset = self.constraints.clamp(offset);
        if let Some(track) = self.read_track() {
            self.handle_position = self.mapping(Some(track)).offset_to_handle(self.offset);
        }
    }

    /// Clamps and stores a handle position, then derives the offset from it.
    /// Skipped while the track has no geometry.
    fn apply_handle_position(&mut self, handle_position: f32) {
        let Some(track) = self.read_track() else {
            return;
        };
        let mapping = self.mapping(Some(track));
        self.handle_position = mapping.clamp_handle(handle_position);
        self.offset = self
            .constraints
            .clamp(mapping.handle_to_offset(self.handle_position));
    }

    /// Raises or clears drag suppression and plans the coast for a release.
    fn finish_drag(&mut self, release: &DragRelease) -> Option<SettlePlan> {
        let now = self.clock.now_millis();
        if self.suppression.record_release(release.distance, now) {
            log::debug!("drag suppression raised at {now}ms");
        }
        let mapping = self.mapping(self.read_track());
        plan_release(release, &self.constraints, &mapping, &self.config)
    }

    fn phase(&self, settling: bool) -> PanPhase {
        if self.destroyed {
            PanPhase::Idle
        } else if self.content_drag.is_active() {
            PanPhase::ContentDragging
        } else if self.handle_drag.is_active() {
            PanPhase::HandleDragging
        } else if settling {
            PanPhase::Settling
        } else {
            PanPhase::Idle
        }
    }

    fn snapshot(&self, settling: bool) -> PanSnapshot {
        let enabled = !self.destroyed && self.constraints.is_enabled();
        let cursor = |dragging: bool| match (enabled, dragging) {
            (false, _) => CursorHint::Default,
            (true, true) => CursorHint::Grabbing,
            (true, false) => CursorHint::Grab,
        };
        PanSnapshot {
            offset: self.offset,
            handle: HandleRender {
                position: self.handle_position,
                width_fraction: self.config.handle_width_fraction,
                enabled,
                centered: !enabled,
                cursor: cursor(self.handle_drag.is_active()),
            },
            surface_cursor: cursor(self.content_drag.is_active()),
            phase: self.phase(settling),
        }
    }
}

/// Runs `f` against the pan state if it is still alive and not borrowed.
fn with_state(state: &Weak<RefCell<PanState>>, f: impl FnOnce(&mut PanState)) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let Ok(mut guard) = state.try_borrow_mut() else {
        log::warn!("pan state busy, dropping settle frame");
        return;
    };
    f(&mut guard);
}

/// Orchestrates panning of an oversized surface.
///
/// Owns the content offset and the handle position and keeps them in
/// agreement through the coordinate mapper. Content and handle drags are
/// mutually exclusive; starting either cancels a running settle animation.
///
/// Settle animations run on the frame callbacks of the [`RuntimeHandle`]
/// passed at construction, so the host must drain that runtime once per
/// frame while [`PanManager::phase`] reports [`PanPhase::Settling`]. Frame
/// times must be on the same timeline as the [`Clock`]: a settle is timed
/// from the clock reading at release.
pub struct PanManager {
    state: Rc<RefCell<PanState>>,
    settle: TweenAnimation,
    haptics: Option<Rc<dyn HapticSink>>,
}

impl PanManager {
    pub fn new(runtime: RuntimeHandle, host: Rc<dyn GeometrySource>, clock: Rc<dyn Clock>) -> Self {
        Self::with_config(runtime, host, clock, PanConfig::default())
    }

    /// Creates a manager and resolves constraints from the host's current
    /// geometry.
    pub fn with_config(
        runtime: RuntimeHandle,
        host: Rc<dyn GeometrySource>,
        clock: Rc<dyn Clock>,
        config: PanConfig,
    ) -> Self {
        let state = PanState {
            content_drag: ContentDragController::new(config.velocity_horizon_ms),
            handle_drag: HandleDragController::new(config.velocity_horizon_ms),
            suppression: DragSuppression::new(config.min_drag_distance),
            config,
            host,
            clock,
            constraints: PanConstraints::DISABLED,
            offset: 0.0,
            handle_position: 0.0,
            destroyed: false,
        };
        let manager = Self {
            state: Rc::new(RefCell::new(state)),
            settle: TweenAnimation::new(runtime),
            haptics: None,
        };
        manager.update_size();
        manager
    }

    pub fn with_haptics(mut self, sink: Rc<dyn HapticSink>) -> Self {
        self.haptics = Some(sink);
        self
    }

    fn pulse(&self, pulse: HapticPulse) {
        if let Some(sink) = &self.haptics {
            sink.pulse(pulse);
        }
    }

    /// Recomputes constraints from the host and re-applies the current
    /// offset, clamped, without animation. Returns whether panning is
    /// possible.
    pub fn update_constraints(&self) -> bool {
        let mut state = self.state.borrow_mut();
        if state.destroyed {
            return false;
        }
        let enabled = state.update_constraints();
        if !enabled {
            drop(state);
            self.settle.cancel();
        }
        enabled
    }

    /// Re-reads all geometry after a layout change.
    pub fn update_size(&self) -> bool {
        self.update_constraints()
    }

    pub fn on_geometry_event(&self, event: GeometryEvent) -> bool {
        log::debug!("geometry event {event:?}");
        self.update_size()
    }

    /// Forces an offset, clamped to the current constraints.
    ///
    /// With `animate` the offset eases to the target using the configured
    /// programmatic animation; otherwise it is applied immediately. Either
    /// way a running animation is cancelled first.
    pub fn set_offset(&self, offset: f32, animate: bool) {
        self.settle.cancel();
        let (start, target, spec) = {
            let mut state = self.state.borrow_mut();
            if state.destroyed {
                return;
            }
            let target = state.constraints.clamp(offset);
            if !animate || target == state.offset {
                state.apply_offset(target);
                return;
            }
            (state.offset, target, state.config.programmatic_animation)
        };
        self.start_settle(SettlePlan {
            axis: SettleAxis::Offset,
            start,
            target,
            spec,
            snapped: false,
        });
    }

    /// Recenters the content and clears drag suppression.
    pub fn reset(&self, animate: bool) {
        self.state.borrow_mut().suppression.clear();
        self.set_offset(0.0, animate);
    }

    /// Cancels all activity and recenters the content. Later input and
    /// geometry notifications are ignored.
    pub fn destroy(&self) {
        self.settle.cancel();
        let mut state = self.state.borrow_mut();
        if state.destroyed {
            return;
        }
        state.content_drag.abandon();
        state.handle_drag.abandon();
        state.suppression.clear();
        state.apply_offset(0.0);
        state.offset = 0.0;
        state.constraints = PanConstraints::DISABLED;
        state.destroyed = true;
        log::debug!("pan manager destroyed");
    }

    pub fn is_destroyed(&self) -> bool {
        self.state.borrow().destroyed
    }

    /// True while a qualifying drag ended within the configured suppression
    /// window. Meant for tap handlers that must ignore drag releases.
    pub fn was_recently_dragging(&self) -> bool {
        let threshold = self.state.borrow().config.drag_suppression_ms;
        self.was_recently_dragging_within(threshold)
    }

    pub fn was_recently_dragging_within(&self, threshold_ms: u64) -> bool {
        let mut state = self.state.borrow_mut();
        let now = state.clock.now_millis();
        state.suppression.is_active(now, threshold_ms)
    }

    /// Routes a pointer event that targeted the content surface.
    /// Returns whether the event was consumed.
    pub fn on_content_input(&self, event: &InputEvent) -> bool {
        match event.kind {
            InputEventKind::Down => self.begin_content_drag(event),
            InputEventKind::Move => self.update_content_drag(event),
            InputEventKind::Up | InputEventKind::Cancel => self.end_content_drag(event),
        }
    }

    /// Routes a pointer event that targeted the handle.
    pub fn on_handle_input(&self, event: &InputEvent) -> bool {
        match event.kind {
            InputEventKind::Down => self.begin_handle_drag(event),
            InputEventKind::Move => self.update_handle_drag(event),
            InputEventKind::Up | InputEventKind::Cancel => self.end_handle_drag(event),
        }
    }

    pub fn begin_content_drag(&self, event: &InputEvent) -> bool {
        let accepted = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            !state.destroyed
                && !state.handle_drag.is_active()
                && state.content_drag.begin(
                    event,
                    state.offset,
                    state.handle_position,
                    &state.constraints,
                )
        };
        if accepted {
            self.settle.cancel();
            self.pulse(HapticPulse::GestureStart);
        }
        accepted
    }

    pub fn update_content_drag(&self, event: &InputEvent) -> bool {
        let mut guard = self.state.borrow_mut();
        let state = &mut *guard;
        match state.content_drag.update(event, &state.constraints) {
            Some(offset) => {
                state.apply_offset(offset);
                true
            }
            None => false,
        }
    }

    pub fn end_content_drag(&self, event: &InputEvent) -> bool {
        let plan = {
            let mut state = self.state.borrow_mut();
            let offset = state.offset;
            let Some(release) = state.content_drag.end(event, offset) else {
                return false;
            };
            state.finish_drag(&release)
        };
        if let Some(plan) = plan {
            self.start_settle(plan);
        }
        true
    }

    pub fn begin_handle_drag(&self, event: &InputEvent) -> bool {
        let accepted = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            if state.destroyed || state.content_drag.is_active() {
                false
            } else {
                let mapping = state.mapping(state.read_track());
                let handle_position = mapping.offset_to_handle(state.offset);
                let accepted =
                    state
                        .handle_drag
                        .begin(event, state.offset, handle_position, &mapping);
                if accepted {
                    state.handle_position = handle_position;
                }
                accepted
            }
        };
        if accepted {
            self.settle.cancel();
            self.pulse(HapticPulse::GestureStart);
        }
        accepted
    }

    pub fn update_handle_drag(&self, event: &InputEvent) -> bool {
        let update = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            if !state.handle_drag.is_active() {
                return false;
            }
            let mapping = state.mapping(state.read_track());
            let update = state.handle_drag.update(
                event,
                &mapping,
                &state.config.snap_points,
                state.config.live_snap_threshold,
            );
            if let Some(update) = update {
                state.handle_position = update.handle_position;
                state.offset = state.constraints.clamp(update.offset);
            }
            update
        };
        match update {
            Some(update) => {
                if update.entered_snap_zone {
                    self.pulse(HapticPulse::SnapEnter);
                }
                true
            }
            None => false,
        }
    }

    pub fn end_handle_drag(&self, event: &InputEvent) -> bool {
        let plan = {
            let mut state = self.state.borrow_mut();
            let Some(release) = state.handle_drag.end(event) else {
                return false;
            };
            state.finish_drag(&release)
        };
        if let Some(plan) = plan {
            self.start_settle(plan);
        }
        true
    }

    fn start_settle(&self, plan: SettlePlan) {
        if plan.snapped {
            log::debug!("release snapped to {:.1}", plan.target);
            self.pulse(HapticPulse::ReleaseSnap);
        }
        let started_at = self
            .state
            .borrow()
            .clock
            .now_millis()
            .saturating_mul(NANOS_PER_MILLI);
        let frames = Rc::downgrade(&self.state);
        self.settle.start(
            plan.start,
            plan.target,
            plan.spec,
            started_at,
            move |value| {
                with_state(&frames, |state| match plan.axis {
                    SettleAxis::Offset => state.apply_offset(value),
                    SettleAxis::Handle => state.apply_handle_position(value),
                })
            },
            move || log::debug!("settled on {:?} at {:.1}", plan.axis, plan.target),
        );
    }

    pub fn render(&self) -> PanSnapshot {
        self.state.borrow().snapshot(self.settle.is_running())
    }

    pub fn phase(&self) -> PanPhase {
        self.state.borrow().phase(self.settle.is_running())
    }

    pub fn offset(&self) -> f32 {
        self.state.borrow().offset
    }

    pub fn handle_position(&self) -> f32 {
        self.state.borrow().handle_position
    }

    pub fn max_offset(&self) -> f32 {
        self.state.borrow().constraints.max_offset
    }

    pub fn constraints(&self) -> PanConstraints {
        self.state.borrow().constraints
    }

    pub fn is_panning_enabled(&self) -> bool {
        let state = self.state.borrow();
        !state.destroyed && state.constraints.is_enabled()
    }

    pub fn config(&self) -> PanConfig {
        self.state.borrow().config.clone()
    }
}

impl std::fmt::Debug for PanManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PanManager")
            .field("offset", &state.offset)
            .field("handle_position", &state.handle_position)
            .field("constraints", &state.constraints)
            .field("phase", &state.phase(self.settle.is_running()))
            .finish()
    }
}

#[cfg(test)]
#[path = "tests/pan_manager_tests.rs"]
mod tests;
