//! Error types shared by the puzzle loaders and drivers.
//!
//! The search engine itself never fails; these errors belong to the layers
//! that build configurations from files or command-line arguments.

use thiserror::Error;

/// Failure to construct a puzzle configuration.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The puzzle file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The puzzle text is malformed. `line` is 1-based.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A command-line value is outside the puzzle's domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PuzzleError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        PuzzleError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for puzzle construction.
pub type Result<T> = std::result::Result<T, PuzzleError>;
