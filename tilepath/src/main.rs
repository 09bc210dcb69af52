//! Headless tilepath runner: scatters obstacles on a 30×30 grid, animates a
//! search with fixed ticks and prints the annotated grid.

use std::process;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tilepath::{
    Command, RunError, Visualizer, drive, parse_point, place_endpoints, scatter_obstacles,
};
use tilepath_core::{Grid, Point};
use tilepath_search::EngineConfig;

/// Status messages echoed after each run.
const STATUS_LINES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Dijkstra,
    Astar,
    /// Dijkstra first, then A* on the same obstacles.
    Both,
}

/// Step-by-step Dijkstra / A* on a random tile grid.
#[derive(Parser, Debug)]
#[command(name = "tilepath")]
#[command(version)]
struct Args {
    /// Search to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Astar)]
    algorithm: AlgorithmArg,

    /// Random seed for obstacle placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Fraction of empty tiles turned into obstacles
    #[arg(short, long, default_value_t = 0.25)]
    density: f64,

    /// Search steps per second
    #[arg(long, default_value_t = 20.0)]
    speed: f32,

    /// Seconds fed to the engine per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    tick: f32,

    /// Start tile as X,Z
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    start: Point,

    /// Goal tile as X,Z
    #[arg(long, value_parser = parse_point, default_value = "29,29")]
    goal: Point,

    /// Give up after this many ticks
    #[arg(long, default_value_t = 1_000_000)]
    max_ticks: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("tilepath: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig {
        steps_per_second: args.speed,
    };
    config.validate().map_err(RunError::from)?;
    if args.tick.is_nan() || args.tick <= 0.0 {
        return Err(format!("tick must be positive, got {}", args.tick).into());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("obstacle seed {seed}, density {}", args.density);
    let mut grid = Grid::new();
    let mut rng = StdRng::seed_from_u64(seed);
    let placed = scatter_obstacles(&mut grid, args.density, &mut rng);

    let mut vis = Visualizer::with_config(grid, config)?;
    place_endpoints(&mut vis, args.start, args.goal)?;
    println!("seed {seed}: {placed} obstacles");

    let runs: &[Command] = match args.algorithm {
        AlgorithmArg::Dijkstra => &[Command::RunDijkstra],
        AlgorithmArg::Astar => &[Command::RunAStar],
        AlgorithmArg::Both => &[Command::RunDijkstra, Command::RunAStar],
    };
    for &cmd in runs {
        let ticks = drive(&mut vis, cmd, args.tick, args.max_ticks)?;
        report(&vis, ticks);
    }
    Ok(())
}

fn report(vis: &Visualizer, ticks: u64) {
    let engine = vis.engine();
    let stats = engine.stats();
    println!();
    println!("{}", vis.grid());
    println!();
    println!("algorithm:      {}", engine.algorithm());
    println!("state:          {}", engine.state());
    println!("nodes explored: {}", stats.nodes_explored);
    println!("path length:    {}", stats.path_length);
    println!("elapsed:        {:.3}s over {ticks} ticks", stats.elapsed.as_secs_f64());
    for line in vis.status_log().recent_lines(STATUS_LINES) {
        println!("  > {line}");
    }
}
