//! Fixed server constants and logging configuration.
//!
//! The listening port, the artificial delay and the response body are
//! compile-time constants. Only the log filter can be tuned through the
//! environment, and it never changes what a client observes.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log filter directive (default: `info`)
//!
//! Variables may also come from a `.env` file (loaded with `dotenvy` in `main.rs`).

use std::env;
use std::time::Duration;

/// TCP port the server listens on, on all interfaces.
pub const LISTEN_PORT: u16 = 8080;

/// Time every request is held before it is answered.
pub const RESPONSE_DELAY: Duration = Duration::from_millis(78);

/// Body of every response.
pub const RESPONSE_BODY: &str = "ok";

/// Logging configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| Self::default().log_level);

        Self { log_level }
    }

    /// Logs the effective settings at debug level.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Listen port: {}", LISTEN_PORT);
        tracing::debug!("  Response delay: {}ms", RESPONSE_DELAY.as_millis());
        tracing::debug!("  Log level: {}", self.log_level);
    }
}
