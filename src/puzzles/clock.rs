use std::fmt;

use crate::configuration::Configuration;
use crate::error::{PuzzleError, Result};

/// A clock face with hours `1..=hours` and a single hand.
///
/// A move turns the hand one hour forward or backward, wrapping between
/// `hours` and `1`. The puzzle is solved when the hand points at `target`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClockConfig {
    hours: u32,
    hand: u32,
    target: u32,
}

impl ClockConfig {
    /// Creates a clock with the hand at `start`.
    ///
    /// Fails with `InvalidArgument` when `hours` is zero or either `start` or
    /// `target` is not on the face.
    pub fn new(hours: u32, start: u32, target: u32) -> Result<Self> {
        if hours == 0 {
            return Err(PuzzleError::InvalidArgument(
                "a clock needs at least one hour".to_string(),
            ));
        }
        for (name, value) in [("start", start), ("end", target)] {
            if !(1..=hours).contains(&value) {
                return Err(PuzzleError::InvalidArgument(format!(
                    "{} hour {} is not between 1 and {}",
                    name, value, hours
                )));
            }
        }
        Ok(ClockConfig { hours, hand: start, target })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    /// The hour the hand currently points at.
    pub fn hand(&self) -> u32 {
        self.hand
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    fn with_hand(&self, hand: u32) -> Self {
        ClockConfig { hand, ..self.clone() }
    }
}

impl Configuration for ClockConfig {
    fn is_solution(&self) -> bool {
        self.hand == self.target
    }

    fn neighbors(&self) -> Vec<Self> {
        let forward = if self.hand == self.hours { 1 } else { self.hand + 1 };
        let backward = if self.hand == 1 { self.hours } else { self.hand - 1 };
        vec![self.with_hand(forward), self.with_hand(backward)]
    }
}

impl fmt::Display for ClockConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hours: {} Start: {} End: {}", self.hours, self.hand, self.target)
    }
}
