//! Sampled-percentile simulation driver.
//!
//! Run with: `cargo run --bin simulation --release -- [FLAGS]`
//!
//! For each requested distribution family the driver runs the
//! configured number of trials, prints the per-trial percentile pairs
//! and the final standard errors, writes one histogram artifact per
//! trial into the output directory, and optionally exports the raw
//! records to CSV with `--export`.

mod plot;
mod report;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tailsample::{run_trials, DistributionKind, RunConfig};

// ============================================================================
// SIMULATION CONFIGURATION
// ============================================================================

/// Data points generated per trial (N)
const DEFAULT_POPULATION_SIZE: usize = 10_000;

/// Independent trials per distribution (Z)
const DEFAULT_TRIALS: usize = 5;

/// Percentage of the population drawn into each sample (M)
const DEFAULT_SAMPLE_PERCENT: f64 = 20.0;

#[derive(Parser, Debug)]
#[command(
    name = "simulation",
    about = "Monte-Carlo validation of sampled latency percentile estimates"
)]
struct Args {
    /// Data points generated per trial.
    #[arg(long, default_value_t = DEFAULT_POPULATION_SIZE)]
    population: usize,

    /// Number of independent trials per distribution.
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Percentage of the population drawn into each sample.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_PERCENT)]
    sample_percent: f64,

    /// Comma-separated distribution families to simulate. Unrecognized
    /// names fall back to the multimodal family.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [
            DistributionKind::Lognormal,
            DistributionKind::Weibull,
            DistributionKind::Pareto,
        ]
    )]
    distributions: Vec<DistributionKind>,

    /// Seed for the random generator; omit for an OS-seeded run.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for histogram artifacts and CSV exports.
    #[arg(long, default_value = "results")]
    out_dir: PathBuf,

    /// Skip writing per-trial histogram artifacts.
    #[arg(long)]
    no_plots: bool,

    /// Export per-trial records and standard errors to CSV.
    #[arg(long)]
    export: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // The output directory must exist before any collaborator writes
    // into it.
    if !args.no_plots || args.export {
        fs::create_dir_all(&args.out_dir)?;
    }

    // One timestamp token per run, shared by all artifact names.
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for &kind in &args.distributions {
        println!();
        println!("Running analysis with {} distribution:", kind);
        println!();

        let config = RunConfig {
            population_size: args.population,
            trials: args.trials,
            sample_percent: args.sample_percent,
            kind,
        };

        let result = run_trials(&config, &mut rng, |trial, population, record| {
            report::print_iteration(trial, record);
            if !args.no_plots {
                plot::write_histogram(&args.out_dir, population, timestamp, trial, kind);
            }
        })?;

        report::print_standard_errors(&result.standard_error);
        report::print_summary_table(kind, &result);

        if args.export {
            report::export_run_csv(&args.out_dir, kind, &result);
        }
    }

    Ok(())
}
