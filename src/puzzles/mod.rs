//! Puzzle adapters for the search engine.
//!
//! - `clock`: move a clock hand one hour at a time to a target hour.
//! - `strings`: rotate letters of a word one step at a time to reach a target word.
//! - `chess`: capture pieces until a single one is left on the board.
//! - `hoppers`: jump frogs over green frogs until no green frog remains.

pub mod chess;
pub mod clock;
pub mod hoppers;
pub mod strings;
