//! Diagnostic logging to stderr via `tracing`.

use tracing_subscriber::EnvFilter;

/// Default filter for a `-v` count when `RUST_LOG` is unset.
#[must_use]
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `verbosity`.
///
/// Logs go to stderr so the manager keeps sole use of stdout.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));
    // A second init (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
