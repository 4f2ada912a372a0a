use bfs_puzzles::logging;
use bfs_puzzles::puzzles::chess::ChessConfig;
use bfs_puzzles::puzzles::hoppers::HoppersConfig;
use bfs_puzzles::session::{Command, Playable, Session, HELP};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::level_filters::LevelFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Puzzle {
    Chess,
    Hoppers,
}

/// Play a board puzzle in the terminal, with hints from the solver.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Which puzzle the file holds
    #[clap(value_enum)]
    puzzle: Puzzle,

    /// Path to the puzzle file
    file: PathBuf,
}

fn play<P: Playable>(path: &Path) -> Result<(), String> {
    let mut session = Session::<P>::open(path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
    println!("Loaded: {}", path.display());
    println!("{}", session.render());
    println!("{}", HELP);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| format!("Error writing output: {}", e))?;

        // End of input ends the game like `quit`.
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.map_err(|e| format!("Error reading input: {}", e))?;
        let command = Command::parse(&line);
        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            _ => {
                if let Some(status) = session.execute(&command) {
                    println!("{}", status);
                    println!("{}", session.render());
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    logging::init(LevelFilter::WARN);

    let result = match args.puzzle {
        Puzzle::Chess => play::<ChessConfig>(&args.file),
        Puzzle::Hoppers => play::<HoppersConfig>(&args.file),
    };
    if let Err(message) = result {
        eprintln!("{}", message);
        process::exit(1);
    }
}
