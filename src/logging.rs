//! Logging setup
//!
//! Events go to stderr so command output on stdout stays machine readable.
//! `RUST_LOG` takes precedence over the `--verbose` flag.

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// Calling this more than once keeps the first subscriber.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
