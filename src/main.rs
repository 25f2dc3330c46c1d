//! Slide Kernel demo
//!
//! Generates a seeded arena and replays a scripted input session through
//! the app loop at 60 frames per second, logging progress as it goes.
//!
//! Usage: `slide-kernel [SETTINGS_JSON] [SEED]`

use slide_kernel::app::{Action, App, Key, Renderer, Session};
use slide_kernel::geom::Point;
use slide_kernel::sim::arena;
use slide_kernel::SimSettings;

const DEFAULT_SEED: u64 = 2024;
const TARGET_COUNT: usize = 12;
const FRAME_MS: f64 = 1000.0 / 60.0;
const SESSION_MS: f64 = 12_000.0;

/// Logs a one-line summary every `every` frames
struct LogRenderer {
    frames: u64,
    every: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, session: &Session) {
        if self.frames % self.every == 0 {
            let world = &session.world;
            let p = world.player.center();
            log::info!(
                "t={:>6.0}ms player=({:.1}, {:.1}) facing=({:.2}, {:.2}) targets={} defeated={}",
                world.elapsed_ms,
                p.x,
                p.y,
                world.player.facing.dx,
                world.player.facing.dy,
                world.targets.len(),
                world.defeated
            );
        }
        self.frames += 1;
    }
}

/// Timed input script: sweep the arena in a square while swinging
fn script() -> Vec<(f64, Action)> {
    let mut actions = vec![
        (0.0, Action::PointerMove(Point::new(500.0, 250.0))),
        (0.0, Action::KeyDown(Key::Right)),
        (2500.0, Action::KeyUp(Key::Right)),
        (2500.0, Action::PointerMove(Point::new(250.0, 500.0))),
        (2500.0, Action::KeyDown(Key::Down)),
        (5000.0, Action::KeyUp(Key::Down)),
        (5000.0, Action::PointerMove(Point::new(0.0, 250.0))),
        (5000.0, Action::KeyDown(Key::Left)),
        (8000.0, Action::KeyDown(Key::Up)),
        (9500.0, Action::KeyUp(Key::Left)),
        (9500.0, Action::PointerMove(Point::new(250.0, 0.0))),
        (11_500.0, Action::KeyUp(Key::Up)),
    ];
    let mut t = 200.0;
    while t < SESSION_MS {
        actions.push((t, Action::PointerDown));
        t += 400.0;
    }
    actions.sort_by(|a, b| a.0.total_cmp(&b.0));
    actions
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => SimSettings::load(path)?,
        None => SimSettings::default(),
    };
    let seed = args
        .next()
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(DEFAULT_SEED);

    let world = arena::generate(seed, &settings, TARGET_COUNT)?;
    let renderer = LogRenderer {
        frames: 0,
        every: 60,
    };
    let mut app = App::new(Session::new(world), settings, renderer);

    let script = script();
    let mut pending = script.iter().peekable();
    let mut now = 0.0;
    while now < SESSION_MS {
        now += FRAME_MS;
        while let Some((_, action)) = pending.next_if(|(at, _)| *at <= now) {
            app.dispatch(*action)?;
        }
        app.frame(now)?;
    }

    let world = &app.session().world;
    log::info!(
        "Session over after {:.0}ms: {} defeated, {} remaining{}",
        world.elapsed_ms,
        world.defeated,
        world.targets.len(),
        if world.is_cleared() { " (arena cleared)" } else { "" }
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Slide Kernel demo starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
