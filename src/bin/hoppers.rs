use bfs_puzzles::cli::{format_steps, LimitArgs};
use bfs_puzzles::logging;
use bfs_puzzles::puzzles::hoppers::HoppersConfig;
use bfs_puzzles::solver::solve_bfs_with_limits;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::level_filters::LevelFilter;

/// Finds the fewest jumps that clear every green frog from the pond.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the pond file
    pond_file: PathBuf,

    #[clap(flatten)]
    limits: LimitArgs,
}

fn main() {
    let args = Args::parse();
    logging::init(LevelFilter::INFO);

    let config = HoppersConfig::load(&args.pond_file).unwrap_or_else(|e| {
        eprintln!("Failed to read pond from {}: {}", args.pond_file.display(), e);
        process::exit(1);
    });
    println!("File: {}", args.pond_file.display());
    println!("{}\n", config);

    let result = solve_bfs_with_limits(&config, &args.limits.limits());
    print!("{}", format_steps(&result, HoppersConfig::to_string));
}
