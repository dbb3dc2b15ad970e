//! Request completion logging.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

/// Logs one line per request: method, matched route, status, latency.
/// Completion level follows the status class.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());

    let start = Instant::now();
    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::error!(%method, route, status, latency_ms, "request failed");
    } else if response.status().is_client_error() {
        tracing::warn!(%method, route, status, latency_ms, "request rejected");
    } else {
        tracing::info!(%method, route, status, latency_ms, "request completed");
    }

    response
}
