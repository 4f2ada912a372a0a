//! Pieces shared by the solver binaries.

use std::time::Duration;

use clap::Args;

use crate::solver::{Outcome, SearchLimits, SearchResult};

/// Search budget flags accepted by every solver binary.
#[derive(Args, Debug, Clone, Default)]
pub struct LimitArgs {
    /// Give up after discovering this many distinct configurations
    #[clap(long)]
    pub max_configs: Option<usize>,

    /// Give up after this many seconds
    #[clap(long)]
    pub timeout_secs: Option<u64>,
}

impl LimitArgs {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_unique_configs: self.max_configs,
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Formats a search result as solver output: one `Step i: ...` line per
/// configuration on the path, or a single line when there is no path.
///
/// `describe` renders one configuration. Multi-line renderings start on the
/// line after their step label and are followed by a blank line.
pub fn format_steps<C>(result: &SearchResult<C>, describe: impl Fn(&C) -> String) -> String {
    match result.outcome {
        Outcome::Unsolvable => return "No solution\n".to_string(),
        Outcome::LimitReached => return "No solution found within the search limits\n".to_string(),
        Outcome::Solved => {}
    }
    let mut output = String::new();
    for (i, config) in result.path.iter().enumerate() {
        let text = describe(config);
        if text.contains('\n') {
            output.push_str(&format!("Step {}:\n{}\n\n", i, text));
        } else {
            output.push_str(&format!("Step {}: {}\n", i, text));
        }
    }
    output
}
