//! Motive Simulation
//!
//! Runs the farm scenario for a number of turns and prints what every farmer
//! ended up doing.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

use motive_core::output::stats::STATS_OUTPUT_PATH;
use motive_core::setup::FarmCatalog;
use motive_core::{EngineConfig, Simulation};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "motive_sim")]
#[command(about = "A motive-driven action selection sandbox")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of turns to simulate (overrides the config file)
    #[arg(long)]
    turns: Option<u64>,

    /// Number of farmers to spawn
    #[arg(long, default_value_t = 3)]
    farmers: usize,

    /// Append every completed action to this JSONL file
    #[arg(long)]
    journal: Option<PathBuf>,

    /// Print each completed action as it happens
    #[arg(long)]
    trace_actions: bool,

    /// Write a JSON statistics summary to output/stats.json
    #[arg(long)]
    stats_json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    if let Some(turns) = args.turns {
        config.simulation.turns = turns;
    }
    if args.journal.is_some() {
        config.logging.journal_path = args.journal.clone();
    }
    config.logging.trace_actions |= args.trace_actions;

    println!("Motive Simulation");
    println!("=================");
    println!("Seed: {}", config.simulation.seed);
    println!("Turns: {}", config.simulation.turns);
    println!("Farmers: {}", args.farmers);
    println!();

    let catalog = FarmCatalog::new()?;
    let mut sim = Simulation::from_config(&config)?;
    catalog.populate(&mut sim, args.farmers)?;

    sim.run(config.simulation.turns)?;

    println!("Actions");
    println!("-------");
    print!("{}", sim.log().action_report());
    println!();
    println!("By actor");
    println!("--------");
    print!("{}", sim.log().actor_report());

    if args.stats_json {
        write_stats(&sim, Path::new(STATS_OUTPUT_PATH))?;
        println!();
        println!("Wrote statistics to {}", STATS_OUTPUT_PATH);
    }
    Ok(())
}

fn write_stats(sim: &Simulation, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let summary = sim.log().summary(sim.turn());
    let json = serde_json::to_string_pretty(&summary)?;
    fs::write(path, json)
}
