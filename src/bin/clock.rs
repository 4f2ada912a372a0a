use bfs_puzzles::cli::{format_steps, LimitArgs};
use bfs_puzzles::logging;
use bfs_puzzles::puzzles::clock::ClockConfig;
use bfs_puzzles::solver::solve_bfs_with_limits;
use clap::Parser;
use std::process;
use tracing::level_filters::LevelFilter;

/// Turns a clock hand from one hour to another in as few moves as possible.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of hours on the clock face
    hours: u32,

    /// Hour the hand starts at
    start: u32,

    /// Hour the hand must reach
    end: u32,

    #[clap(flatten)]
    limits: LimitArgs,
}

fn main() {
    let args = Args::parse();
    logging::init(LevelFilter::INFO);

    let clock = match ClockConfig::new(args.hours, args.start, args.end) {
        Ok(clock) => clock,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    println!("{}", clock);

    let result = solve_bfs_with_limits(&clock, &args.limits.limits());
    print!("{}", format_steps(&result, |c| c.hand().to_string()));
}
