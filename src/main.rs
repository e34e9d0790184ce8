//! monopoly-sim CLI - run a simulation and report landing statistics.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use monopoly_sim::{SimError, SimulationConfig, Simulator};

/// Simulate Monopoly movement and count landings per space
#[derive(Parser, Debug)]
#[command(name = "monopoly-sim")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players
    players: usize,

    /// Number of rounds; every player takes one turn per round
    turns: u32,

    /// Dice seed (default: random)
    seed: Option<u64>,

    /// Write the turn-by-turn narrative before the statistics table and log
    /// at debug level. Without it the output file holds only the table.
    #[arg(short, long)]
    verbose: bool,

    /// Output file (default: output/{players}p{turns}r[{seed}s][v].out)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let mut config = SimulationConfig::new(args.players, args.turns).verbose(args.verbose);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut simulator = Simulator::new(config)?;

    let path = args
        .output
        .unwrap_or_else(|| simulator.config().output_path());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut out = BufWriter::new(File::create(&path)?);
    let report = simulator.run(&mut out)?;
    report.write_table(&mut out)?;
    out.flush()?;
    log::info!("report written to {}", path.display());

    let mut stdout = io::stdout().lock();
    if args.json {
        report.write_json(&mut stdout)?;
    } else {
        report.write_table(&mut stdout)?;
    }
    Ok(())
}
