//! # BFS Puzzles Library
//!
//! This library provides a generic breadth-first shortest-path solver and a
//! handful of puzzles built on top of it.
//!
//! A puzzle only has to describe its states: implement [`Configuration`] with a
//! goal test and a neighbor enumeration, and [`solve_bfs`] returns a shortest
//! sequence of configurations from the initial one to a solution.
//!
//! It is used by several binaries:
//! - `clock`, `strings`, `chess`, `hoppers`: solve one puzzle instance given on
//!   the command line and print every step of the solution.
//! - `ptui`: play chess or hoppers interactively, asking the solver for hints.
//!
//! ## Modules
//! - `configuration`: The `Configuration` trait every puzzle state implements.
//! - `solver`: `solve_bfs` and its variants with search limits and statistics.
//! - `puzzles`: Clock, strings, chess solitaire and hoppers adapters.
//! - `grid`: Rectangular boards and coordinates used by the board puzzles.
//! - `session`: Interactive play state (load, reset, hint, select).
//! - `utils`: Parsing board puzzle files.
//! - `error`: `PuzzleError` and the crate `Result` alias.
//! - `cli`, `logging`: Helpers shared by the binaries.

pub mod cli;
pub mod configuration;
pub mod error;
pub mod grid;
pub mod logging;
pub mod puzzles;
pub mod session;
pub mod solver;
pub mod utils;

pub use configuration::Configuration;
pub use error::{PuzzleError, Result};
pub use solver::{solve_bfs, Outcome, SearchLimits, SearchResult};
