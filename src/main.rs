//! Ball Arena entry point
//!
//! Builds or resumes a world, renders one frame per tick and optionally
//! saves the final state for a later run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use ball_arena::consts::*;
use ball_arena::persistence::{FrameStore, load_snapshot, save_snapshot};
use ball_arena::renderer::Canvas;
use ball_arena::sim::{Simulation, default_world, random_world};
use ball_arena::{Settings, World};

#[derive(Parser, Debug)]
#[command(version, about = "Simulate bouncing balls and render them frame by frame")]
struct Args {
    /// Run settings (JSON)
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Continue from the saved snapshot instead of generating new balls
    #[arg(long)]
    resume: bool,

    /// Start from a single ball instead of the configured random set
    #[arg(long, conflicts_with = "resume")]
    demo: bool,

    /// Snapshot file read by --resume and written by --save-snapshot
    #[arg(long, default_value = DEFAULT_SNAPSHOT_FILE)]
    snapshot: PathBuf,

    /// Directory for numbered frame files
    #[arg(long, default_value = DEFAULT_FRAMES_DIR)]
    frames: PathBuf,

    /// Ticks to simulate (defaults to NUM_FRAMES)
    #[arg(long)]
    ticks: Option<u64>,

    /// RNG seed (defaults to SEED, then OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Save the final world so a later --resume can continue it
    #[arg(long)]
    save_snapshot: bool,

    /// Delete the rendered frames once the run finishes
    #[arg(long)]
    discard_frames: bool,
}

fn initial_world(args: &Args, settings: &Settings, frames: &FrameStore, rng: &mut Pcg32) -> Result<World> {
    if args.resume {
        return load_snapshot(&args.snapshot)
            .with_context(|| format!("cannot resume from {}", args.snapshot.display()));
    }

    // A new project starts from an empty frame sequence
    frames.clear().context("cannot clear old frames")?;

    if args.demo {
        Ok(default_world(settings.window_width, settings.window_height, rng))
    } else {
        random_world(settings, rng).context("cannot generate balls")
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Ball Arena starting...");

    let settings = Settings::load(&args.config)
        .with_context(|| format!("cannot load settings from {}", args.config.display()))?;
    let seed = args
        .seed
        .or(settings.seed)
        .unwrap_or_else(|| rand::rng().random());
    log::info!("Seed: {seed}");
    let mut rng = Pcg32::seed_from_u64(seed);

    let frames = FrameStore::open(&args.frames)?;
    let world = initial_world(&args, &settings, &frames, &mut rng)?;

    let ticks = args.ticks.unwrap_or(settings.num_frames);
    let first = frames.next_index()?;
    let mut canvas = Canvas::new(world.width(), world.height());
    let mut sim = Simulation::new(world, rng);

    log::info!(
        "Rendering {} ticks of {} balls into {}",
        ticks,
        sim.world().balls.len(),
        frames.dir().display()
    );
    sim.run(ticks, |i, world| {
        canvas.render(world);
        frames.write(first + i, &canvas)
    })?;

    if ticks > 0 {
        log::info!(
            "Frames {}..={} ready for encoding at {} fps",
            first,
            first + ticks - 1,
            settings.frame_rate
        );
    }

    if args.save_snapshot {
        save_snapshot(&args.snapshot, sim.world())?;
    }
    if args.discard_frames {
        frames.clear()?;
    }

    log::info!("Done");
    Ok(())
}
