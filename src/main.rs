//! Only Jump! native entry point
//!
//! Runs the simulation headless with the autopilot at the helm and logs what
//! happens. `RUST_LOG=debug` shows spawns, scoring and sounds.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;

use only_jump::audio::LogAudio;
use only_jump::consts::TITLE;
use only_jump::host::{AutoPilot, Clock, FixedStepClock, SystemClock};
use only_jump::renderer::LogRenderer;
use only_jump::{App, Settings};

#[derive(Parser, Debug)]
#[command(name = "only-jump", about = "Endless vertical platformer, headless runner")]
struct Args {
    /// Settings JSON file (overrides ONLY_JUMP_SETTINGS)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Frames to simulate before quitting
    #[arg(long, default_value_t = 3600)]
    frames: u64,

    /// Run in real time instead of as fast as possible
    #[arg(long)]
    realtime: bool,

    /// Print the final game state as JSON
    #[arg(long)]
    snapshot: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("{} (native) starting...", TITLE);

    let settings = match &args.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::load(),
    };

    let seed = args.seed.or(settings.seed).unwrap_or_else(clock_seed);

    if args.realtime {
        run(args, seed, &settings, SystemClock::new())
    } else {
        run(args, seed, &settings, FixedStepClock::default())
    }
}

fn run<C: Clock>(args: Args, seed: u64, settings: &Settings, clock: C) -> anyhow::Result<()> {
    let mut app = App::new(
        seed,
        settings,
        clock,
        AutoPilot::with_frame_limit(args.frames),
        LogRenderer::default(),
        LogAudio::default(),
    );

    let frames = app.run(None);
    log::info!(
        "Finished after {} frames: {} lives, best score {}, current score {}",
        frames,
        app.lives(),
        app.best_score(),
        app.state().world.score
    );

    if args.snapshot {
        let json = serde_json::to_string_pretty(app.state()).context("serializing game state")?;
        println!("{}", json);
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
