//! Headless demo scheduler
//!
//! Drives the simulation at a fixed 60 Hz step with scripted input: the
//! actor marches for the top row until the run ends, the script taps
//! restart once, and a second run plays out. A real host would swap in a
//! window, a keyboard, and a GPU-backed sink; the wiring stays the same.

use glam::Vec2;
use rand::Rng;

use scuttle_run::platform::{AssetKey, AssetProvider, Control, InputSource, RenderSink};
use scuttle_run::scene;
use scuttle_run::sim::{Phase, TickInput, World, tick};

/// Fixed frame step; a windowed host would measure and cap its delta instead
const FRAME_DT: f32 = 1.0 / 60.0;

/// Scripted stand-in for a keyboard: holds Up while a run is live and
/// holds Restart once the run has ended
struct DemoScript {
    restarting: bool,
}

impl InputSource for DemoScript {
    fn is_down(&self, control: Control) -> bool {
        match control {
            Control::MoveUp => !self.restarting,
            Control::Restart => self.restarting,
            _ => false,
        }
    }
}

/// Asset provider that ships no art; every frame degrades to placeholders
struct NoArt;

impl NoArt {
    fn new() -> Self {
        log::warn!("demo ships no images; the sink will only see placeholders");
        Self
    }
}

impl AssetProvider for NoArt {
    type Image = ();

    fn image(&self, _key: AssetKey) -> Option<&()> {
        None
    }
}

/// Render sink that counts draw requests and logs the overlay lines
#[derive(Default)]
struct LogSink {
    draws: usize,
}

impl RenderSink for LogSink {
    type Image = ();

    fn draw(&mut self, image: Option<&()>, pos: Vec2, size: Vec2) {
        self.draws += 1;
        if image.is_none() {
            log::trace!("placeholder at {pos} size {size}");
        }
    }

    fn draw_text(&mut self, text: &str) {
        log::debug!("overlay: {text}");
    }
}

fn main() {
    env_logger::init();

    let seed = rand::rng().random::<u64>();
    log::info!("scuttle-run demo starting, seed {seed}");

    let mut world = World::new(seed);
    let assets = NoArt::new();
    let mut sink = LogSink::default();
    let mut script = DemoScript { restarting: false };

    let mut frames = 0u32;
    let mut finished_runs = 0u32;

    // One synchronous tick per frame against the single owned world
    loop {
        frames += 1;
        let input = TickInput::poll(&script);
        tick(&mut world, &input, FRAME_DT);
        scene::present(&world, &assets, &mut sink);

        if world.phase == Phase::Playing {
            script.restarting = false;
            continue;
        }
        if !script.restarting {
            finished_runs += 1;
            if finished_runs == 2 {
                break;
            }
            script.restarting = true;
        }
    }

    log::info!(
        "demo finished: {} runs over {} frames, {} draw requests",
        finished_runs,
        frames,
        sink.draws
    );
}
