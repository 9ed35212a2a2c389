//! HTTP route definitions.

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::http::handlers::{health, home, info};

/// Create the service router.
///
/// ## Route Structure
///
/// ```text
/// GET /        - Welcome message with request-time timestamp
/// GET /health  - Liveness stub
/// GET /info    - Pipeline tooling description
/// ```
///
/// Unknown paths get axum's default 404 and other methods on these
/// paths get 405. Every request runs inside a `TraceLayer` span.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/info", get(info))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
