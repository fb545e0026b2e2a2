use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use algolab::heuristics::Heuristic;
use algolab::parse::board_from_str;
use algolab::solver::solve;

/// Solve a sliding puzzle with the minimum number of moves.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Distance estimate guiding the search
    #[clap(short = 'H', long, value_enum, default_value = "manhattan")]
    heuristic: Heuristic,

    /// Path to the board file (dimension, then row-major tiles, 0 = blank)
    board_file: PathBuf,
}

fn main() -> Result<()> {
    algolab::logging::init();
    let args = Args::parse();

    let content = fs::read_to_string(&args.board_file)
        .with_context(|| format!("failed to read {}", args.board_file.display()))?;
    let board = board_from_str(&content)
        .with_context(|| format!("invalid board in {}", args.board_file.display()))?;

    println!("Initial board:");
    println!("{}", board);

    match solve(&board, args.heuristic) {
        Some(solution) => {
            println!("Minimum number of moves = {}", solution.moves());
            for step in &solution.path {
                println!("{}", step);
            }
        }
        None => println!("No solution possible"),
    }
    Ok(())
}
