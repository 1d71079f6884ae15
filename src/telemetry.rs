//! Global tracing subscriber setup.

use crate::config::Config;
use tracing_subscriber::EnvFilter;

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the process-wide plain-text fmt subscriber, filtered by `RUST_LOG`.
///
/// An unparsable directive falls back to `info`. Must be called once, before
/// the server starts.
pub fn init(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .init();
}
