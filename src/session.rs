//! Interactive play on top of a board puzzle.
//!
//! A `Session` tracks the puzzle a player started from, the position they are
//! in now and a pending piece selection. Each operation returns a [`Status`]
//! describing what happened; front-ends only need to print it and redraw the
//! board. Illegal moves and unreadable files are reported as statuses and
//! never disturb the current position.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::configuration::Configuration;
use crate::error::Result;
use crate::grid::Coordinates;
use crate::solver::{solve_bfs_with_limits, Outcome, SearchLimits};

/// A board puzzle a player can move pieces on.
pub trait Playable: Configuration + fmt::Display {
    /// Reads a puzzle file.
    fn load(path: &Path) -> Result<Self>;

    /// The board with row and column labels.
    fn render(&self) -> String;

    /// Checks that `at` holds something the player may move.
    fn check_selection(&self, at: Coordinates) -> std::result::Result<(), Rejection>;

    /// The configuration after moving the piece at `from` to `to`, if that is
    /// one of the legal moves.
    fn apply_move(&self, from: Coordinates, to: Coordinates) -> std::result::Result<Self, Rejection>;
}

/// Why a player's move was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{0} is off the board")]
    OutOfBounds(Coordinates),
    #[error("Invalid selection at {0}")]
    Unselectable(Coordinates),
    #[error("Nothing to move at {0}")]
    NothingToMove(Coordinates),
    #[error("Can't move from {from} to {to}")]
    CannotMove { from: Coordinates, to: Coordinates },
}

/// Outcome of a session operation, shown to the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loaded(PathBuf),
    LoadFailed(String),
    Reset,
    Selected(Coordinates),
    Moved { from: Coordinates, to: Coordinates },
    Rejected(Rejection),
    NextStep,
    AlreadySolved,
    NoSolution,
    /// The hint search hit its limits before reaching a verdict.
    GaveUp,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Loaded(path) => write!(f, "Loaded: {}", path.display()),
            Status::LoadFailed(reason) => write!(f, "Failed to load: {}", reason),
            Status::Reset => write!(f, "Puzzle reset!"),
            Status::Selected(at) => write!(f, "Selected {}", at),
            Status::Moved { from, to } => write!(f, "Moved from {} to {}", from, to),
            Status::Rejected(rejection) => write!(f, "{}", rejection),
            Status::NextStep => write!(f, "Next step!"),
            Status::AlreadySolved => write!(f, "Already solved!"),
            Status::NoSolution => write!(f, "No solution"),
            Status::GaveUp => write!(f, "Gave up searching for a hint"),
        }
    }
}

pub struct Session<P> {
    source: Option<PathBuf>,
    initial: P,
    current: P,
    selected: Option<Coordinates>,
    limits: SearchLimits,
}

impl<P: Playable> Session<P> {
    pub fn new(initial: P) -> Self {
        Session {
            source: None,
            current: initial.clone(),
            initial,
            selected: None,
            limits: SearchLimits::default(),
        }
    }

    /// Starts a session from a puzzle file.
    pub fn open(path: &Path) -> Result<Self> {
        let mut session = Session::new(P::load(path)?);
        session.source = Some(path.to_path_buf());
        Ok(session)
    }

    /// Bounds the searches run by [`Session::hint`].
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn current(&self) -> &P {
        &self.current
    }

    pub fn selected(&self) -> Option<Coordinates> {
        self.selected
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Replaces the puzzle with the one in `path`. On failure the current
    /// puzzle is kept as it was.
    pub fn load(&mut self, path: &Path) -> Status {
        match P::load(path) {
            Ok(config) => {
                self.source = Some(path.to_path_buf());
                self.current = config.clone();
                self.initial = config;
                self.selected = None;
                Status::Loaded(path.to_path_buf())
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Load failed");
                Status::LoadFailed(err.to_string())
            }
        }
    }

    /// Returns to the position the puzzle was loaded in.
    pub fn reset(&mut self) -> Status {
        self.current = self.initial.clone();
        self.selected = None;
        Status::Reset
    }

    /// Advances the current position by one move along a shortest solution.
    pub fn hint(&mut self) -> Status {
        self.selected = None;
        let result = solve_bfs_with_limits(&self.current, &self.limits);
        match result.outcome {
            Outcome::LimitReached => Status::GaveUp,
            Outcome::Unsolvable => Status::NoSolution,
            Outcome::Solved => match result.path.into_iter().nth(1) {
                Some(next) => {
                    self.current = next;
                    Status::NextStep
                }
                None => Status::AlreadySolved,
            },
        }
    }

    /// First call picks the piece to move, second call picks its destination.
    pub fn select(&mut self, at: Coordinates) -> Status {
        match self.selected.take() {
            None => match self.current.check_selection(at) {
                Ok(()) => {
                    self.selected = Some(at);
                    Status::Selected(at)
                }
                Err(rejection) => Status::Rejected(rejection),
            },
            Some(from) => match self.current.apply_move(from, at) {
                Ok(next) => {
                    self.current = next;
                    Status::Moved { from, to: at }
                }
                Err(rejection) => Status::Rejected(rejection),
            },
        }
    }

    pub fn render(&self) -> String {
        self.current.render()
    }

    /// Runs a console command. Returns `None` for commands that produce no
    /// status (`Quit` and `Help`).
    pub fn execute(&mut self, command: &Command) -> Option<Status> {
        let status = match command {
            Command::Hint => self.hint(),
            Command::Load(path) => self.load(path),
            Command::Select(at) => self.select(*at),
            Command::Reset => self.reset(),
            Command::Quit | Command::Help => return None,
        };
        debug!(%status, "Command executed");
        Some(status)
    }
}

/// Console help shown for unknown input.
pub const HELP: &str = "\
h(int)              -- hint next move
l(oad) filename     -- load new puzzle file
s(elect) r c        -- select cell at r, c
q(uit)              -- quit the game
r(eset)             -- reset the current game";

/// A line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hint,
    Load(PathBuf),
    Select(Coordinates),
    Reset,
    Quit,
    Help,
}

impl Command {
    /// Commands are matched on their first letter; malformed input is `Help`.
    pub fn parse(line: &str) -> Command {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(first) = words.first() else {
            return Command::Help;
        };
        match (first.chars().next(), &words[1..]) {
            (Some('q'), _) => Command::Quit,
            (Some('h'), _) => Command::Hint,
            (Some('r'), _) => Command::Reset,
            (Some('l'), [path, ..]) => Command::Load(PathBuf::from(path)),
            (Some('s'), [row, col, ..]) => match (row.parse(), col.parse()) {
                (Ok(row), Ok(col)) => Command::Select(Coordinates::new(row, col)),
                _ => Command::Help,
            },
            _ => Command::Help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::chess::ChessConfig;
    use crate::puzzles::hoppers::HoppersConfig;
    use std::fs;

    fn at(row: usize, col: usize) -> Coordinates {
        Coordinates::new(row, col)
    }

    fn chess(text: &str) -> Session<ChessConfig> {
        Session::new(text.parse().unwrap())
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bfs_puzzles_{}_{}.txt", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_command_parse() {
        assert_eq!(Command::parse("hint"), Command::Hint);
        assert_eq!(Command::parse("h"), Command::Hint);
        assert_eq!(Command::parse("  quit "), Command::Quit);
        assert_eq!(Command::parse("reset"), Command::Reset);
        assert_eq!(Command::parse("load data/a.txt"), Command::Load(PathBuf::from("data/a.txt")));
        assert_eq!(Command::parse("s 1 2"), Command::Select(at(1, 2)));
        assert_eq!(Command::parse("select 1 x"), Command::Help);
        assert_eq!(Command::parse("s 1"), Command::Help);
        assert_eq!(Command::parse("load"), Command::Help);
        assert_eq!(Command::parse(""), Command::Help);
        assert_eq!(Command::parse("xyz"), Command::Help);
    }

    #[test]
    fn test_hint_distinguishes_outcomes() {
        let mut solved = chess("1 2\n. R\n");
        assert_eq!(solved.hint(), Status::AlreadySolved);

        let mut stuck = chess("2 3\nP . .\n. . P\n");
        let before = stuck.current().clone();
        assert_eq!(stuck.hint(), Status::NoSolution);
        assert_eq!(stuck.current(), &before);

        let mut session = chess("1 3\nR . N\n");
        assert_eq!(session.hint(), Status::NextStep);
        assert_eq!(session.current().to_string(), ". . R");
        assert_eq!(session.hint(), Status::AlreadySolved);
    }

    #[test]
    fn test_hint_respects_limits() {
        let limits = SearchLimits {
            max_unique_configs: Some(1),
            ..SearchLimits::default()
        };
        let mut session = chess("1 3\nR . N\n").with_limits(limits);
        assert_eq!(session.hint(), Status::GaveUp);
    }

    #[test]
    fn test_select_then_move_then_reset() {
        let mut session = chess("1 3\nR . N\n");
        assert_eq!(session.select(at(0, 0)), Status::Selected(at(0, 0)));
        assert_eq!(session.selected(), Some(at(0, 0)));
        assert_eq!(session.select(at(0, 2)), Status::Moved { from: at(0, 0), to: at(0, 2) });
        assert_eq!(session.selected(), None);
        assert!(session.current().is_solution());

        assert_eq!(session.reset(), Status::Reset);
        assert_eq!(session.current().to_string(), "R . N");
    }

    #[test]
    fn test_illegal_moves_are_advisory() {
        let mut session = chess("1 3\nR . N\n");
        assert_eq!(session.select(at(0, 1)), Status::Rejected(Rejection::NothingToMove(at(0, 1))));
        assert_eq!(session.select(at(4, 4)), Status::Rejected(Rejection::OutOfBounds(at(4, 4))));

        session.select(at(0, 2));
        let status = session.select(at(0, 0));
        assert_eq!(status, Status::Rejected(Rejection::CannotMove { from: at(0, 2), to: at(0, 0) }));
        assert_eq!(status.to_string(), "Can't move from (0, 2) to (0, 0)");
        assert_eq!(session.selected(), None);
        assert_eq!(session.current().to_string(), "R . N");
    }

    #[test]
    fn test_water_is_not_selectable() {
        let mut session: Session<HoppersConfig> = Session::new("1 2\n* G\n".parse().unwrap());
        assert_eq!(session.select(at(0, 0)), Status::Rejected(Rejection::Unselectable(at(0, 0))));
        assert_eq!(session.select(at(0, 1)), Status::Selected(at(0, 1)));
    }

    #[test]
    fn test_load_success_and_failure() {
        let good = temp_file("load_good", "1 2\nQ P\n");
        let bad = temp_file("load_bad", "1 2\nQ X\n");

        let mut session = chess("1 3\nR . N\n");
        session.select(at(0, 0));
        assert_eq!(session.load(&good), Status::Loaded(good.clone()));
        assert_eq!(session.current().to_string(), "Q P");
        assert_eq!(session.selected(), None);
        assert_eq!(session.source(), Some(good.as_path()));

        let status = session.load(&bad);
        assert!(matches!(status, Status::LoadFailed(ref reason) if reason.contains("unknown symbol 'X'")));
        assert_eq!(session.current().to_string(), "Q P");
        assert!(matches!(session.load(Path::new("/nonexistent/puzzle.txt")), Status::LoadFailed(_)));
        assert_eq!(session.source(), Some(good.as_path()));

        // Reset returns to the last successfully loaded puzzle.
        session.hint();
        session.reset();
        assert_eq!(session.current().to_string(), "Q P");

        fs::remove_file(good).ok();
        fs::remove_file(bad).ok();
    }

    #[test]
    fn test_load_oversized_board_is_recoverable() {
        let huge = temp_file("load_huge", "99999999999 99999999999\n. .\n");
        let mut session = chess("1 3\nR . N\n");
        let status = session.load(&huge);
        assert_eq!(status, Status::LoadFailed("Parse error on line 1: board too large".to_string()));
        assert_eq!(session.current().to_string(), "R . N");
        fs::remove_file(huge).ok();
    }

    #[test]
    fn test_open_and_execute() {
        let path = temp_file("open", "3 3\nR * .\n* G *\n. * .\n");
        let mut session = Session::<HoppersConfig>::open(&path).unwrap();
        assert_eq!(session.source(), Some(path.as_path()));
        assert_eq!(session.execute(&Command::Help), None);
        assert_eq!(session.execute(&Command::Select(at(0, 0))), Some(Status::Selected(at(0, 0))));
        assert_eq!(
            session.execute(&Command::Select(at(2, 2))),
            Some(Status::Moved { from: at(0, 0), to: at(2, 2) })
        );
        assert_eq!(session.execute(&Command::Hint), Some(Status::AlreadySolved));
        assert_eq!(
            session.render(),
            "   0 1 2 \n  -----\n0| . * . \n1| * . * \n2| . * R \n"
        );
        fs::remove_file(path).ok();

        assert!(Session::<ChessConfig>::open(Path::new("/nonexistent/puzzle.txt")).is_err());
    }
}
