//! Log output for the binaries.
//!
//! Logs go to stderr so that solution output on stdout stays clean. The
//! `RUST_LOG` environment variable overrides the default level, e.g.
//! `RUST_LOG=bfs_puzzles=debug`.

use std::sync::OnceLock;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static INIT: OnceLock<()> = OnceLock::new();

/// Installs the global subscriber. Later calls do nothing.
pub fn init(default_level: LevelFilter) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}
