mod host;

use std::rc::Rc;
use std::sync::Arc;

use anyhow::{bail, Context};
use viewfinder_core::{DefaultScheduler, Runtime, RuntimeHandle, NANOS_PER_MILLI};
use viewfinder_foundation::InputEvent;
use viewfinder_ui::{GeometryEvent, GeometrySource, PanManager, PanPhase};

use host::{ConsoleHaptics, DemoHost, ReplayClock};

const FRAME_MILLIS: u64 = 16;

struct Replay {
    runtime: RuntimeHandle,
    clock: Rc<ReplayClock>,
    manager: PanManager,
    now_millis: u64,
}

impl Replay {
    fn at(&mut self, millis: u64) {
        self.now_millis += millis;
        self.clock.set(self.now_millis);
    }

    fn content(&mut self, event: InputEvent) {
        self.clock.set(event.timestamp_ms);
        self.now_millis = event.timestamp_ms;
        self.manager.on_content_input(&event);
    }

    fn handle(&mut self, event: InputEvent) {
        self.clock.set(event.timestamp_ms);
        self.now_millis = event.timestamp_ms;
        self.manager.on_handle_input(&event);
    }

    /// Renders frames until the manager stops settling.
    fn settle(&mut self) {
        self.print_frame();
        while self.manager.phase() == PanPhase::Settling {
            self.at(FRAME_MILLIS);
            self.runtime
                .drain_frame_callbacks(self.now_millis * NANOS_PER_MILLI);
            self.print_frame();
        }
    }

    fn print_frame(&self) {
        let frame = self.manager.render();
        println!(
            "  t={:>5}ms offset {:>8.2}  handle {:>7.2}  {:?}",
            self.now_millis, frame.offset, frame.handle.position, frame.phase
        );
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let host = Rc::new(DemoHost::new());
    let clock = Rc::new(ReplayClock::default());
    let manager = PanManager::new(runtime.handle(), host.clone(), clock.clone())
        .with_haptics(Rc::new(ConsoleHaptics));

    let track = host
        .handle_track()
        .context("demo host must provide a handle track")?;
    if !manager.is_panning_enabled() {
        bail!("demo geometry leaves nothing to pan");
    }

    println!("=== Viewfinder demo ===");
    println!("max offset {:.1}", manager.max_offset());

    let mut replay = Replay {
        runtime: runtime.handle(),
        clock,
        manager,
        now_millis: 0,
    };

    println!("-- flick the photo left");
    replay.content(InputEvent::down(1, 500.0, 100));
    for (i, x) in [470.0, 420.0, 350.0, 270.0].into_iter().enumerate() {
        replay.content(InputEvent::moved(1, x, 100 + 12 * (i as u64 + 1)));
    }
    replay.content(InputEvent::up(1, 270.0, 148));
    replay.settle();
    println!(
        "tap now would be ignored: {}",
        replay.manager.was_recently_dragging()
    );

    println!("-- scrub the handle back toward the middle");
    replay.at(500);
    let start = replay.now_millis;
    let handle_x = replay.manager.handle_position();
    replay.handle(InputEvent::down(2, handle_x, start));
    let target = replay
        .manager
        .config()
        .snap_points
        .candidates(track.movable_width())
        .nth(1);
    let mut x = handle_x;
    for step in 1..=8 {
        x -= 30.0;
        replay.handle(InputEvent::moved(2, x, start + 40 * step));
        replay.print_frame();
    }
    replay.at(200);
    replay.handle(InputEvent::up(2, x, replay.now_millis));
    replay.settle();
    println!("middle snap point: {target:?}");

    println!("-- animate back to center");
    replay.manager.reset(true);
    replay.settle();

    println!("-- rotate the device");
    host.rotate();
    let enabled = replay
        .manager
        .on_geometry_event(GeometryEvent::OrientationChange);
    println!(
        "panning enabled: {enabled}, max offset {:.1}",
        replay.manager.max_offset()
    );

    replay.manager.destroy();
    log::info!("demo finished");
    Ok(())
}
