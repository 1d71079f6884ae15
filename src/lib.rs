//! # Mock Backend
//!
//! A minimal HTTP server that emulates the latency of a backend service.
//! Every request, whatever its method, path, headers or body, is held for a
//! fixed 78 ms and then answered with `200 OK` and the body `ok`.
//!
//! Useful as the downstream of a proxy, load generator or client under test.
//!
//! ## Layout
//!
//! - [`api`] - Catch-all handler and tracing middleware
//! - [`routes`] - Router assembly
//! - [`server`] - Listener binding and the serve loop
//! - [`config`] - Fixed constants and logging settings
//! - [`telemetry`] - Tracing subscriber setup
//! - [`error`] - Startup errors
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run
//! # Mock backend listening on :8080
//! curl -i http://localhost:8080/anything
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod telemetry;

pub use error::ServerError;

/// Commonly used items for integration tests and embedding.
pub mod prelude {
    pub use crate::config::{LISTEN_PORT, RESPONSE_BODY, RESPONSE_DELAY};
    pub use crate::error::ServerError;
    pub use crate::routes::app_router;
}
