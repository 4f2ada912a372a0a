use bfs_puzzles::cli::{format_steps, LimitArgs};
use bfs_puzzles::logging;
use bfs_puzzles::puzzles::chess::ChessConfig;
use bfs_puzzles::solver::solve_bfs_with_limits;
use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing::level_filters::LevelFilter;

/// Finds the shortest series of captures that leaves one piece on the board.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the board file
    board_file: PathBuf,

    #[clap(flatten)]
    limits: LimitArgs,
}

fn main() {
    let args = Args::parse();
    logging::init(LevelFilter::INFO);

    let config = ChessConfig::load(&args.board_file).unwrap_or_else(|e| {
        eprintln!("Failed to read board from {}: {}", args.board_file.display(), e);
        process::exit(1);
    });
    println!("File: {}", args.board_file.display());
    println!("{}\n", config);

    let result = solve_bfs_with_limits(&config, &args.limits.limits());
    print!("{}", format_steps(&result, ChessConfig::to_string));
}
