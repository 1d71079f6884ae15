//! Handler for every request the server receives.

use axum::http::StatusCode;
use tokio::time::sleep;
use tracing::debug;

use crate::config::{RESPONSE_BODY, RESPONSE_DELAY};

/// Answers any request with `200 OK` and body `ok` after [`RESPONSE_DELAY`].
///
/// # Endpoint
///
/// Any method, any path (registered as the router fallback).
///
/// # Request Flow
///
/// 1. Suspend this task for the fixed delay (other connections keep being accepted)
/// 2. Return the fixed body
///
/// Headers and body of the request are never read, so any payload is accepted.
pub async fn mock_handler() -> (StatusCode, &'static str) {
    sleep(RESPONSE_DELAY).await;
    debug!("Delay of {}ms elapsed", RESPONSE_DELAY.as_millis());

    (StatusCode::OK, RESPONSE_BODY)
}
