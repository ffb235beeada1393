use anyhow::{bail, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::path::PathBuf;

use sandgox::config::SandgoxConfig;
use sandgox::headless::{BenchmarkRunner, HeadlessSession, SessionConfig};
use sandgox::screenshot;
use sandgox::simulation::CellType;
use sandgox::world::{Brush, SeedPattern};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run the benchmark board for a fixed number of ticks, report timing and exit
    #[arg(long)]
    benchmark: bool,

    /// Number of ticks to run outside benchmark mode
    #[arg(long, default_value = "600")]
    ticks: u64,

    /// Starting layout: empty, benchmark
    #[arg(long, default_value = "empty")]
    seed_pattern: SeedPattern,

    /// Seed for the simulation RNG (random when omitted)
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Cell type to paint every tick at the top centre: air, sand, water, metal, water_generator, black_hole
    #[arg(long)]
    brush: Option<CellType>,

    /// Brush radius in cells (defaults to brush.default_radius)
    #[arg(long)]
    brush_radius: Option<u32>,

    /// Write the final frame to this PNG file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Configuration file name, with or without the `.ron` extension (default: config.ron)
    #[arg(long)]
    config: Option<String>,

    /// Show a progress bar while running
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match &args.config {
        Some(file_name) => SandgoxConfig::load_from(file_name)?,
        None => SandgoxConfig::load()?,
    };

    let seed = args.rng_seed.unwrap_or_else(rand::random);
    log::info!("Starting Sandgox (rng seed {seed})");
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

    if args.benchmark {
        return run_benchmark(&args, &config, &mut rng);
    }

    let brush = select_brush(&args, &config)?;

    let mut session_config = SessionConfig::from_config(&config, args.seed_pattern, args.ticks);
    session_config.brush = brush;
    session_config.snapshot = args.snapshot.clone();
    session_config.show_progress = args.progress;

    let mut session = HeadlessSession::new(session_config, &mut rng);
    session.run(&mut rng)?;
    Ok(())
}

fn run_benchmark(
    args: &Args,
    config: &SandgoxConfig,
    rng: &mut Xoshiro256StarStar,
) -> Result<()> {
    if args.brush.is_some() || args.seed_pattern != SeedPattern::Empty {
        log::warn!("--brush and --seed-pattern are ignored in benchmark mode");
    }

    let mut runner = BenchmarkRunner::new(
        config.grid_size(),
        config.rules,
        config.benchmark.clone(),
        rng,
    );
    let report = runner.run(rng);
    println!("{report}");

    if let Some(path) = &args.snapshot {
        screenshot::capture_world_snapshot(
            runner.world(),
            config.screen.cell_size as usize,
            config.render,
            path,
        )?;
    }
    Ok(())
}

/// Brush held down for the run, if any
fn select_brush(args: &Args, config: &SandgoxConfig) -> Result<Option<Brush>> {
    if args.brush.is_none() && args.brush_radius.is_none() {
        return Ok(None);
    }

    let radius = args.brush_radius.unwrap_or(config.brush.default_radius);
    if radius > config.brush.max_radius {
        bail!(
            "--brush-radius {} exceeds brush.max_radius ({})",
            radius,
            config.brush.max_radius
        );
    }

    let cell_type = args.brush.unwrap_or(config.brush.default_cell_type);
    Ok(Some(Brush::new(cell_type, radius)))
}
