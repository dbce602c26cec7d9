//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns a static JSON status payload
//! when the process is running. Used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

/// The status string reported while the process is up.
pub const STATUS_OK: &str = "ok";

/// The health status payload, serialized as `{"status":"ok"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Build the health status payload.
///
/// Infallible and deterministic: every call yields the same value.
pub fn health_status() -> HealthStatus {
    HealthStatus { status: STATUS_OK }
}

/// Health check handler.
///
/// Returns the status payload as `application/json` to indicate the service
/// is running. This is a liveness probe - it only checks that the process can
/// respond to HTTP.
pub async fn health() -> Json<HealthStatus> {
    Json(health_status())
}
