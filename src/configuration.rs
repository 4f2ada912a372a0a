//! The capability contract every puzzle state satisfies.

use std::hash::Hash;

/// One immutable snapshot of a puzzle's complete state.
///
/// Equality and hashing must be by value: two configurations with the same
/// content compare equal and hash identically no matter how they were built.
/// The search engine relies on this to deduplicate states.
///
/// A configuration is never mutated after construction. A move is expressed by
/// building a new, structurally independent configuration.
pub trait Configuration: Clone + Eq + Hash {
    /// Returns `true` if this state is a goal. Must be pure and defined for
    /// every reachable state.
    fn is_solution(&self) -> bool;

    /// Returns every configuration reachable by exactly one legal move.
    ///
    /// The collection must be finite. Its order does not affect the length of
    /// the path found, only which of several equally short paths is returned.
    fn neighbors(&self) -> Vec<Self>;
}
