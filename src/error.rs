//! Startup and runtime errors of the mock server.
//!
//! The request handler itself is infallible; every variant here describes a
//! failure of the process as a whole.

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be created (port in use, no privilege).
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// `axum::serve` returned an I/O error. Accept errors are retried inside
    /// axum, so a running server does not produce this in practice.
    #[error("server error")]
    Serve(#[source] std::io::Error),
}
