//! HTTP route handlers.
//!
//! The service exposes a single route: the `/health` liveness probe. Anything
//! else falls through to axum's default handling. Request tracing is enabled
//! via `tower-http` so every request logs its method, path, and status.

pub mod health;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all routes and request tracing.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
}
