use anyhow::{ensure, Result};
use clap::Parser;

use algolab::percolation::PercolationStats;

/// Estimate the percolation threshold by Monte Carlo simulation.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Grid dimension n (the grid has n * n sites)
    n: usize,

    /// Number of independent experiments to run
    trials: usize,

    /// Seed for reproducible runs; omit for a fresh random run
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    algolab::logging::init();
    let args = Args::parse();
    ensure!(args.n > 0, "grid dimension must be positive");
    ensure!(args.trials > 0, "at least one trial is required");

    let stats = match args.seed {
        Some(seed) => PercolationStats::with_seed(args.n, args.trials, seed),
        None => PercolationStats::new(args.n, args.trials),
    };

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!(
        "95% confidence interval = [{}, {}]",
        stats.confidence_low(),
        stats.confidence_high()
    );
    Ok(())
}
