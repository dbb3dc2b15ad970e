//! Route definitions and router assembly.

mod users;

pub use users::user_routes;

use axum::{middleware::from_fn, routing::get, Router};

use crate::handlers::health::{health, root};
use crate::middleware::request_logging;
use crate::state::AppState;

/// Builds the complete application router. Integration tests call this
/// with their own state, so they exercise the same routing and layers as
/// the server.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(user_routes())
        .layer(from_fn(request_logging))
        .with_state(state)
}
