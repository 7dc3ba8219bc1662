mod config_file;
mod portrayal;

use clap::Parser;
use config_file::{load_config, CliError};
use forest_fire_core::sweep::{density_sweep, linspace};
use forest_fire_core::{run_sweep, ActivationMode, FireSimulation, ForestConfig};
use portrayal::{legend, render_frame};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Forest fire simulation with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire")]
#[command(about = "Wind-driven forest fire cellular automaton", long_about = None)]
struct Args {
    /// TOML file with a base configuration (flags override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Tree density (0-1)
    #[arg(short, long)]
    density: Option<f64>,

    /// Base probability of spread (0-100)
    #[arg(short, long)]
    probability: Option<u32>,

    /// South wind speed (-25 to 25, negative blows from the north)
    #[arg(long, allow_hyphen_values = true)]
    south_wind: Option<i32>,

    /// West wind speed (-25 to 25, negative blows from the east)
    #[arg(long, allow_hyphen_values = true)]
    west_wind: Option<i32>,

    /// Enable or disable ember jumps
    #[arg(long)]
    big_jumps: Option<bool>,

    /// Steps in a run
    #[arg(long)]
    horizon: Option<u32>,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Only trees burning at the start of a step may spread during it
    #[arg(long)]
    snapshot: bool,

    /// Print the grid after every step
    #[arg(short, long)]
    render: bool,

    /// Colour the rendered grid with ANSI escapes
    #[arg(long)]
    color: bool,

    /// Run a density sweep instead of a single simulation
    #[arg(long)]
    sweep: bool,

    /// Lowest density in the sweep
    #[arg(long, default_value_t = 0.1)]
    density_from: f64,

    /// Highest density in the sweep
    #[arg(long, default_value_t = 1.0)]
    density_to: f64,

    /// Number of densities in the sweep
    #[arg(long, default_value_t = 10)]
    density_points: usize,

    /// Replicate runs per density
    #[arg(long, default_value_t = 10)]
    runs: usize,
}

impl Args {
    /// Base configuration (file or defaults) with flag overrides applied
    fn forest_config(&self) -> Result<ForestConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ForestConfig::default(),
        };
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(probability) = self.probability {
            config.probability_of_spread = probability;
        }
        if let Some(south) = self.south_wind {
            config.south_wind_speed = south;
        }
        if let Some(west) = self.west_wind {
            config.west_wind_speed = west;
        }
        if let Some(big_jumps) = self.big_jumps {
            config.big_jumps = big_jumps;
        }
        if let Some(horizon) = self.horizon {
            config.horizon = horizon;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.snapshot {
            config.activation = ActivationMode::Snapshot;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let result = if args.sweep {
        sweep(&args)
    } else {
        simulate(&args)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn simulate(args: &Args) -> Result<(), CliError> {
    let config = args.forest_config()?;
    println!("=== Forest Fire Simulation ===\n");
    println!(
        "Grid: {}x{}, density {:.2}, spread {}%",
        config.width, config.height, config.density, config.probability_of_spread
    );
    println!(
        "Wind: south {}, west {}, big jumps {}, activation {:?}",
        config.south_wind_speed, config.west_wind_speed, config.big_jumps, config.activation
    );

    let mut sim = FireSimulation::new(config)?;
    println!("Trees: {}\n", sim.counts().total());

    if args.render {
        println!("Legend: {}\n", legend());
        println!("{}", render_frame(&sim, args.color));
    }
    println!("Step | Fine  | Burning | Burned | Burned %");
    println!("-----|-------|---------|--------|---------");

    while !sim.finished() {
        sim.step();
        let counts = sim.counts();
        println!(
            "{:4} | {:5} | {:7} | {:6} | {:7.2}",
            sim.step_count(),
            counts.fine,
            counts.burning,
            counts.burned_out,
            sim.burned_fraction() * 100.0
        );
        if args.render {
            println!("{}", render_frame(&sim, args.color));
        }
    }

    let summary = sim.summary();
    println!("\n=== Simulation Complete ===");
    println!("Steps: {}", summary.steps);
    println!("Burned fraction: {:.4}", summary.burned_fraction);
    if summary.fire_active {
        println!("Fire still active: {} trees burning", summary.counts.burning);
    }
    Ok(())
}

fn sweep(args: &Args) -> Result<(), CliError> {
    let base = args.forest_config()?;
    let densities = linspace(args.density_from, args.density_to, args.density_points);
    let configs = density_sweep(&base, &densities);
    let base_seed = base.seed.unwrap_or(0);

    info!(
        "Density sweep {:.2}..{:.2} over {} points",
        args.density_from, args.density_to, args.density_points
    );
    let results = run_sweep(&configs, args.runs, base_seed)?;

    println!("=== Density Sweep ({} runs each) ===\n", args.runs);
    println!("Density | Mean burned | Std dev | Min    | Max");
    println!("--------|-------------|---------|--------|-------");
    for result in &results {
        println!(
            "{:7.3} | {:11.4} | {:7.4} | {:6.4} | {:6.4}",
            result.config.density,
            result.mean(),
            result.std_dev(),
            result.min(),
            result.max()
        );
    }
    Ok(())
}
