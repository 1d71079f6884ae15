//! Router configuration.
//!
//! # Route Structure
//!
//! - `*  /*` - Catch-all: every method and path reaches [`mock_handler`]
//!
//! # Middleware
//!
//! - **Tracing** - Request/response spans at debug level

use crate::api::handlers::mock_handler;
use crate::api::middleware::tracing;
use axum::Router;

/// Constructs the application router.
///
/// No explicit routes are registered; the handler is installed as the
/// fallback so it matches every method and path, including `/`.
pub fn app_router() -> Router {
    Router::new()
        .fallback(mock_handler)
        .layer(tracing::layer())
}
