//! Tracing/logging initialization.
//!
//! Diagnostics go to stderr so they never interleave with the interactive
//! transcript on stdout. `RUST_LOG` controls filtering (default `info`);
//! `STOCKBOOK_LOG_FORMAT=json` switches to JSON lines for machine-collected
//! runs.

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var("STOCKBOOK_LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if json {
        let _ = builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init();
    } else {
        let _ = builder.compact().without_time().try_init();
    }
}
