use std::fmt;

use crate::configuration::Configuration;
use crate::error::{PuzzleError, Result};

const ALPHABET_LEN: u8 = 26;

/// A word of uppercase ASCII letters being turned into a target word.
///
/// A move rotates one letter a single step forward or backward through the
/// alphabet, with `Z` and `A` adjacent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StringsConfig {
    current: String,
    target: String,
}

/// Rotates an uppercase letter by `step` positions, wrapping around the alphabet.
fn rotate(letter: char, step: u8) -> char {
    let index = letter as u8 - b'A';
    (b'A' + (index + step) % ALPHABET_LEN) as char
}

impl StringsConfig {
    /// Fails with `InvalidArgument` unless both words are non-empty strings of
    /// `A..=Z` with the same length.
    pub fn new(start: &str, target: &str) -> Result<Self> {
        for word in [start, target] {
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(PuzzleError::InvalidArgument(format!(
                    "'{}' must be a non-empty word of letters A-Z",
                    word
                )));
            }
        }
        if start.len() != target.len() {
            return Err(PuzzleError::InvalidArgument(format!(
                "'{}' and '{}' have different lengths",
                start, target
            )));
        }
        Ok(StringsConfig {
            current: start.to_string(),
            target: target.to_string(),
        })
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    fn with_letter_rotated(&self, position: usize, step: u8) -> Self {
        let current = self
            .current
            .chars()
            .enumerate()
            .map(|(i, c)| if i == position { rotate(c, step) } else { c })
            .collect();
        StringsConfig {
            current,
            target: self.target.clone(),
        }
    }
}

impl Configuration for StringsConfig {
    fn is_solution(&self) -> bool {
        self.current == self.target
    }

    fn neighbors(&self) -> Vec<Self> {
        (0..self.current.len())
            .flat_map(|i| {
                [
                    self.with_letter_rotated(i, 1),
                    self.with_letter_rotated(i, ALPHABET_LEN - 1),
                ]
            })
            .collect()
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Start: {}, End: {}", self.current, self.target)
    }
}
