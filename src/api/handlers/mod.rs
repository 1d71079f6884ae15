//! HTTP request handlers.

pub mod mock;

pub use mock::mock_handler;
