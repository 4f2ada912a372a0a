use bfs_puzzles::cli::{format_steps, LimitArgs};
use bfs_puzzles::logging;
use bfs_puzzles::puzzles::strings::StringsConfig;
use bfs_puzzles::solver::solve_bfs_with_limits;
use clap::Parser;
use std::process;
use tracing::level_filters::LevelFilter;

/// Rotates the letters of a word until it spells the target word.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Starting word, uppercase letters only
    start: String,

    /// Word to reach, same length as the start
    finish: String,

    #[clap(flatten)]
    limits: LimitArgs,
}

fn main() {
    let args = Args::parse();
    logging::init(LevelFilter::INFO);

    let config = match StringsConfig::new(&args.start, &args.finish) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    println!("{}", config);

    let result = solve_bfs_with_limits(&config, &args.limits.limits());
    print!("{}", format_steps(&result, |c| c.current().to_string()));
}
