use anyhow::{ensure, Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use algolab::randomized_queue::RandomizedQueue;

/// Print k uniformly random distinct tokens from the input.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of tokens to print
    k: usize,

    /// Input file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Seed for reproducible output; omit for a fresh random choice
    #[clap(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    algolab::logging::init();
    let args = Args::parse();

    let content = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let mut queue = match args.seed {
        Some(seed) => RandomizedQueue::with_seed(seed),
        None => RandomizedQueue::new(),
    };
    for token in content.split_whitespace() {
        queue.enqueue(token);
    }
    ensure!(
        args.k <= queue.len(),
        "asked for {} tokens but the input holds only {}",
        args.k,
        queue.len()
    );

    for _ in 0..args.k {
        // Safe to unwrap: k is bounded by the queue length above.
        println!("{}", queue.dequeue().unwrap());
    }
    Ok(())
}
