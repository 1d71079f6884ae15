//! HTTP layer: the request handler and the middleware wrapped around it.

pub mod handlers;
pub mod middleware;
