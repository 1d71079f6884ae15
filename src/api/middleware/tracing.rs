//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Spans and events are emitted at `DEBUG` level, so with the default `info`
/// filter nothing is printed per request. Run with `RUST_LOG=debug` to see them.
///
/// # Example Logs
///
/// ```text
/// DEBUG request{method=POST uri=/anything/nested version=HTTP/1.1}: started processing request
/// DEBUG request{method=POST uri=/anything/nested version=HTTP/1.1}: finished processing request latency=78 ms status=200
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::DEBUG)
                .latency_unit(LatencyUnit::Millis),
        )
}
