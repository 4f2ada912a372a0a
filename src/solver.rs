//! Breadth-first shortest-path search over puzzle configurations.
//!
//! The engine explores the configuration graph layer by layer from the initial
//! state and stops at the first solution it dequeues. Every move costs one, so
//! that solution is reached by a minimum number of moves.
//!
//! Each call owns its own frontier and predecessor records; nothing is shared
//! between calls, so searches on separate values may run on separate threads.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::configuration::Configuration;

/// Arena index of the initial configuration.
const ROOT: usize = 0;

/// Optional budget for a search. The default is unlimited.
///
/// A search that finishes within its budget behaves exactly like an unlimited
/// one; a search that runs out reports [`Outcome::LimitReached`].
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Maximum number of distinct configurations to discover.
    pub max_unique_configs: Option<usize>,
    /// Maximum wall-clock time to spend.
    pub timeout: Option<Duration>,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A solution was found; the path leads to it.
    Solved,
    /// Every reachable configuration was explored without finding a solution.
    Unsolvable,
    /// The search gave up because a [`SearchLimits`] bound was hit.
    LimitReached,
}

/// Exploration counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// The initial configuration plus every neighbor generated, duplicates included.
    pub configs_enumerated: u64,
    /// Distinct configurations discovered.
    pub unique_configs: u64,
    /// Configurations taken off the frontier.
    pub expanded: u64,
}

/// Result of a search.
#[derive(Debug, Clone)]
pub struct SearchResult<C> {
    /// Configurations from the initial one to the solution, both included.
    /// Empty unless `outcome` is [`Outcome::Solved`].
    pub path: Vec<C>,
    pub outcome: Outcome,
    pub stats: SearchStats,
}

impl<C> SearchResult<C> {
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// Number of moves in the solution, if one was found.
    pub fn moves(&self) -> Option<usize> {
        if self.is_solved() {
            Some(self.path.len() - 1)
        } else {
            None
        }
    }

    /// The configuration one move closer to the goal, if the initial
    /// configuration is not already solved.
    pub fn next_step(&self) -> Option<&C> {
        self.path.get(1)
    }
}

/// Finds a shortest path from `initial` to a solution.
///
/// # Examples
/// ```
/// use bfs_puzzles::puzzles::clock::ClockConfig;
/// use bfs_puzzles::solver::solve_bfs;
///
/// let clock = ClockConfig::new(8, 1, 3).unwrap();
/// let result = solve_bfs(&clock);
/// let hands: Vec<u32> = result.path.iter().map(|c| c.hand()).collect();
/// assert_eq!(hands, vec![1, 2, 3]);
/// ```
pub fn solve_bfs<C: Configuration>(initial: &C) -> SearchResult<C> {
    solve_bfs_with_limits(initial, &SearchLimits::default())
}

/// Like [`solve_bfs`], but stops early when `limits` are exceeded.
pub fn solve_bfs_with_limits<C: Configuration>(initial: &C, limits: &SearchLimits) -> SearchResult<C> {
    solve_bfs_by(initial.clone(), C::is_solution, C::neighbors, limits)
}

/// Breadth-first search over any hashable state, with the goal test and the
/// neighbor enumeration supplied as closures.
///
/// When several parents in the same layer reach the same child, the first one
/// to be expanded is recorded. Which of several shortest paths is returned is
/// therefore unspecified; its length is not.
pub fn solve_bfs_by<S, G, N, I>(
    initial: S,
    mut is_goal: G,
    mut neighbors: N,
    limits: &SearchLimits,
) -> SearchResult<S>
where
    S: Clone + Eq + Hash,
    G: FnMut(&S) -> bool,
    N: FnMut(&S) -> I,
    I: IntoIterator<Item = S>,
{
    let deadline = limits.timeout.map(|timeout| Instant::now() + timeout);
    let mut stats = SearchStats {
        configs_enumerated: 1,
        ..SearchStats::default()
    };

    // Every discovered state is stored once; `predecessors[i]` is the index of
    // the state `states[i]` was first reached from. The root points at itself.
    let mut states = vec![initial.clone()];
    let mut predecessors = vec![ROOT];
    let mut index = HashMap::from([(initial, ROOT)]);
    let mut frontier = VecDeque::from([ROOT]);

    let mut outcome = Outcome::Unsolvable;
    let mut goal = None;

    'search: while let Some(current) = frontier.pop_front() {
        stats.expanded += 1;
        if is_goal(&states[current]) {
            outcome = Outcome::Solved;
            goal = Some(current);
            break;
        }
        if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            outcome = Outcome::LimitReached;
            break;
        }
        for neighbor in neighbors(&states[current]) {
            stats.configs_enumerated += 1;
            if let Entry::Vacant(slot) = index.entry(neighbor) {
                if limits.max_unique_configs.is_some_and(|max| states.len() >= max) {
                    outcome = Outcome::LimitReached;
                    break 'search;
                }
                let id = states.len();
                states.push(slot.key().clone());
                predecessors.push(current);
                slot.insert(id);
                frontier.push_back(id);
            }
        }
    }

    stats.unique_configs = states.len() as u64;
    let path = match goal {
        Some(goal) => reconstruct_path(&states, &predecessors, goal),
        None => Vec::new(),
    };

    info!(
        total_configs = stats.configs_enumerated,
        unique_configs = stats.unique_configs,
        ?outcome,
        "Search finished"
    );
    if let Some(moves) = path.len().checked_sub(1) {
        debug!(moves, "Shortest path reconstructed");
    }

    SearchResult { path, outcome, stats }
}

/// Walks predecessor links from `goal` back to the root and returns the states
/// in start-to-goal order.
fn reconstruct_path<S: Clone>(states: &[S], predecessors: &[usize], goal: usize) -> Vec<S> {
    let mut path = Vec::new();
    let mut node = goal;
    while node != ROOT {
        path.push(states[node].clone());
        node = predecessors[node];
    }
    path.push(states[ROOT].clone());
    path.reverse();
    path
}
