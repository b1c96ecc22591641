//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so that command output on stdout stays clean
//! for piping (`aircond evaluate --json | jq`).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber using `filter` (`RUST_LOG` syntax).
///
/// An unparsable directive falls back to `warn`.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
