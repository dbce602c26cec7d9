//! Pulse: a minimal health-status HTTP service.
//!
//! This is the application entry point. It parses command line arguments,
//! resolves configuration from the environment, initializes tracing, builds
//! the router with the single health route, and starts the HTTP (or HTTPS)
//! server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::config::Settings;
use pulse::routes::create_router;
use pulse::server;

/// Pulse: a minimal health-status HTTP service
#[derive(Parser, Debug)]
#[command(name = "pulse", version, about)]
struct Args {
    /// Log level filter (e.g., "pulse=debug,tower_http=info"); overrides LOG_LEVEL
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Resolve configuration once, up front; an invalid value is fatal
    let settings = Settings::from_env()?;

    // Initialize tracing with priority: CLI > LOG_LEVEL > default
    let log_filter = args
        .log_level
        .unwrap_or_else(|| settings.log_level.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        tls = settings.tls.enabled,
        "Loaded configuration"
    );

    // Create router
    let app = create_router();

    // Start server; blocks until the process is terminated
    if let Err(e) = server::start_server(app, &settings).await {
        tracing::error!(error = %e, "Server failed to start");
        return Err(e.into());
    }

    Ok(())
}
