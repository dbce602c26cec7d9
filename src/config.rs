//! Configuration resolution and constants.
//!
//! All settings come from environment variables with hard-coded defaults and
//! are resolved exactly once at process entry into an immutable [`Settings`]
//! value, which is then passed into the server bootstrap. Nothing else in the
//! process reads the environment. A variable that is unset falls back to its
//! default; a variable that is set to an invalid value is a fatal startup
//! error.

use std::fmt;
use std::str::FromStr;

// =============================================================================
// Environment Variables
// =============================================================================

/// Listener TCP port.
pub const ENV_PORT: &str = "SERVICE_PORT";

/// Listener bind address.
pub const ENV_HOST: &str = "SERVICE_HOST";

/// Minimum log severity emitted by the process-wide logger.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// TLS termination toggle.
pub const ENV_TLS_ENABLED: &str = "TLS_ENABLED";

/// Path to the PEM certificate (TLS only).
pub const ENV_TLS_CERT_PATH: &str = "TLS_CERT_PATH";

/// Path to the PEM private key (TLS only).
pub const ENV_TLS_KEY_PATH: &str = "TLS_KEY_PATH";

// =============================================================================
// Defaults
// =============================================================================

/// Default listener port
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default certificate path for TLS termination
pub const DEFAULT_CERT_PATH: &str = "certs/server.crt";

/// Default private key path for TLS termination
pub const DEFAULT_KEY_PATH: &str = "certs/server.key";

/// Resolved service configuration.
///
/// Read-only after resolution; owned by the server bootstrap for the lifetime
/// of the process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bind address for the listener. Not validated here; a value that is not
    /// a resolvable address surfaces as a bind error at startup.
    pub host: String,
    /// TCP port for the listener.
    pub port: u16,
    /// Minimum log severity for the tracing subscriber.
    pub log_level: LogLevel,
    /// TLS termination settings.
    pub tls: TlsSettings,
}

/// TLS termination settings.
///
/// TLS is an explicit toggle rather than a separate build of the service:
/// when disabled, the certificate and key paths are carried but never read.
#[derive(Debug, Clone)]
pub struct TlsSettings {
    pub enabled: bool,
    pub cert_path: String,
    pub key_path: String,
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings from an arbitrary variable lookup.
    ///
    /// The lookup returns the raw value of a named variable, or `None` when it
    /// is unset. `from_env` wires this to `std::env::var`; tests supply a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: resolve_host(lookup(ENV_HOST).as_deref()),
            port: resolve_port(lookup(ENV_PORT).as_deref())?,
            log_level: resolve_log_level(lookup(ENV_LOG_LEVEL).as_deref())?,
            tls: TlsSettings::resolve(
                lookup(ENV_TLS_ENABLED).as_deref(),
                lookup(ENV_TLS_CERT_PATH).as_deref(),
                lookup(ENV_TLS_KEY_PATH).as_deref(),
            )?,
        })
    }
}

impl TlsSettings {
    /// Resolve the TLS toggle and material paths from their raw values.
    fn resolve(
        enabled: Option<&str>,
        cert_path: Option<&str>,
        key_path: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let enabled = match enabled {
            Some(value) => parse_bool(ENV_TLS_ENABLED, value)?,
            None => false,
        };

        Ok(Self {
            enabled,
            cert_path: cert_path.unwrap_or(DEFAULT_CERT_PATH).to_string(),
            key_path: key_path.unwrap_or(DEFAULT_KEY_PATH).to_string(),
        })
    }
}

/// Resolve the listener port from the raw `SERVICE_PORT` value.
///
/// A present but unparseable value (non-numeric, or outside the TCP port
/// range) is a fatal configuration error rather than a silent fallback.
pub fn resolve_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw {
        Some(value) => value.parse().map_err(|source| ConfigError::InvalidPort {
            value: value.to_string(),
            source,
        }),
        None => Ok(DEFAULT_PORT),
    }
}

/// Resolve the bind address from the raw `SERVICE_HOST` value.
///
/// The value is taken as-is; no shape validation happens at this layer.
pub fn resolve_host(raw: Option<&str>) -> String {
    raw.unwrap_or(DEFAULT_HOST).to_string()
}

/// Resolve the log level from the raw `LOG_LEVEL` value.
///
/// A present value outside the recognized set is a fatal configuration error,
/// matching the port variable's fail-fast behavior.
pub fn resolve_log_level(raw: Option<&str>) -> Result<LogLevel, ConfigError> {
    match raw {
        Some(value) => value.parse(),
        None => Ok(LogLevel::default()),
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

/// Minimum log severity emitted by the process-wide logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Lowercase level name, as accepted in `LOG_LEVEL` and by the tracing
    /// filter syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SERVICE_PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid LOG_LEVEL value {0:?}: expected one of debug, info, warn, error")]
    InvalidLogLevel(String),
    #[error("Invalid {name} value {value:?}: expected true/false, 1/0 or yes/no")]
    InvalidBool { name: &'static str, value: String },
}
