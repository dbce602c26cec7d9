//! Pulse - a minimal health-status HTTP service.
//!
//! Exposes a single `/health` endpoint returning a static JSON status
//! payload. Configuration (bind address, port, log level, TLS toggle) is
//! resolved from environment variables with hard-coded defaults; TLS
//! termination, when enabled, uses a user-provided certificate/key pair.

pub mod config;
pub mod routes;
pub mod server;
