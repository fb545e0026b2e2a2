use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

use algolab::collinear::{brute_segments, fast_segments};
use algolab::parse::points_from_str;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    /// Check every 4-combination of points
    Brute,
    /// Sort by slope around each origin
    Fast,
}

/// Print every line segment containing four or more of the input points.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Finder to run
    #[clap(short, long, value_enum, default_value = "fast")]
    method: Method,

    /// Path to the points file (count, then x y pairs)
    points_file: PathBuf,
}

fn main() -> Result<()> {
    algolab::logging::init();
    let args = Args::parse();

    let content = fs::read_to_string(&args.points_file)
        .with_context(|| format!("failed to read {}", args.points_file.display()))?;
    let points = points_from_str(&content)
        .with_context(|| format!("invalid points in {}", args.points_file.display()))?;

    let segments = match args.method {
        Method::Brute => brute_segments(&points),
        Method::Fast => fast_segments(&points),
    };
    for segment in &segments {
        println!("{}", segment);
    }
    Ok(())
}
