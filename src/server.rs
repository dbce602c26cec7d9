//! HTTP/HTTPS server startup logic.
//!
//! Supports two modes:
//! - Manual TLS: user-provided certificate files
//! - None: plain HTTP
//!
//! Either way, startup ends in a blocking accept loop that runs until the
//! process is terminated externally; there is no programmatic shutdown path.

use std::net::SocketAddr;

use axum::Router;
use axum_server::tls_rustls::RustlsConfig;

use crate::config::{Settings, TlsSettings};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address {addr:?}: {source}")]
    Addr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to load TLS material: {0}")]
    TlsMaterial(String),

    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP or HTTPS server for the resolved settings.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, settings: &Settings) -> Result<(), ServerError> {
    let addr = listen_addr(settings)?;

    if settings.tls.enabled {
        start_tls_server(app, addr, &settings.tls).await
    } else {
        start_plain_server(app, addr).await
    }
}

/// Parse the configured host and port into a socket address.
///
/// The host is carried unvalidated from the environment, so a value that is
/// not an IP address surfaces here, before any listener is created.
fn listen_addr(settings: &Settings) -> Result<SocketAddr, ServerError> {
    let addr = format!("{}:{}", settings.host, settings.port);
    addr.parse()
        .map_err(|source| ServerError::Addr { addr, source })
}

/// Start a plain HTTP server (no TLS).
async fn start_plain_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server (no TLS)");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

/// Start an HTTPS server with user-provided certificates.
async fn start_tls_server(
    app: Router,
    addr: SocketAddr,
    tls: &TlsSettings,
) -> Result<(), ServerError> {
    let rustls_config = load_tls_config(tls).await?;

    tracing::info!(%addr, cert = %tls.cert_path, key = %tls.key_path, "Starting HTTPS server");

    axum_server::bind_rustls(addr, rustls_config)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

/// Load the certificate/key pair used for TLS termination.
///
/// Fails when either file is missing or does not contain valid PEM material.
/// Called before the listener is created, so a bad pair means the process
/// never accepts a connection.
pub async fn load_tls_config(tls: &TlsSettings) -> Result<RustlsConfig, ServerError> {
    RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
        .await
        .map_err(|e| {
            ServerError::TlsMaterial(format!(
                "certificate {:?}, key {:?}: {}",
                tls.cert_path, tls.key_path, e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    fn settings(host: &str, port: u16) -> Settings {
        Settings {
            host: host.to_string(),
            port,
            log_level: LogLevel::Info,
            tls: TlsSettings {
                enabled: false,
                cert_path: "certs/server.crt".to_string(),
                key_path: "certs/server.key".to_string(),
            },
        }
    }

    #[test]
    fn listen_addr_accepts_ip_hosts() {
        let addr = listen_addr(&settings("127.0.0.1", 9999)).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:9999");
    }

    #[test]
    fn listen_addr_rejects_unresolvable_hosts() {
        let err = listen_addr(&settings("not an address", 8080)).unwrap_err();
        assert!(matches!(err, ServerError::Addr { .. }));
    }

    #[tokio::test]
    async fn tls_load_fails_when_files_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        let tls = TlsSettings {
            enabled: true,
            cert_path: dir.path().join("server.crt").to_string_lossy().into_owned(),
            key_path: dir.path().join("server.key").to_string_lossy().into_owned(),
        };

        let err = load_tls_config(&tls).await.unwrap_err();
        assert!(matches!(err, ServerError::TlsMaterial(_)));
    }

    #[tokio::test]
    async fn tls_load_fails_on_invalid_pem_material() {
        let dir = tempfile::tempdir().unwrap();
        let cert_path = dir.path().join("server.crt");
        let key_path = dir.path().join("server.key");
        std::fs::write(&cert_path, "not a certificate").unwrap();
        std::fs::write(&key_path, "not a key").unwrap();

        let tls = TlsSettings {
            enabled: true,
            cert_path: cert_path.to_string_lossy().into_owned(),
            key_path: key_path.to_string_lossy().into_owned(),
        };

        let err = load_tls_config(&tls).await.unwrap_err();
        assert!(matches!(err, ServerError::TlsMaterial(_)));
    }
}
