//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! HTTP cache headers, logging, shutdown and default paths. `AppConfig` is the
//! root configuration struct containing all settings.

use const_format::formatcp;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// The greeting never changes, so upstream caches may keep it for a while.
// All values are in seconds.

/// Home page - static greeting
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;
pub const HTTP_CACHE_HOME_SWR: u32 = 30;

/// Stale-if-error duration - serve stale content during backend failures (5 minutes)
pub const HTTP_CACHE_STALE_IF_ERROR: u32 = 300;

pub const CACHE_CONTROL_HOME: &str = formatcp!(
    "public, max-age={}, stale-while-revalidate={}, stale-if-error={}",
    HTTP_CACHE_HOME_MAX_AGE,
    HTTP_CACHE_HOME_SWR,
    HTTP_CACHE_STALE_IF_ERROR
);

// =============================================================================
// Server Lifecycle
// =============================================================================

/// Seconds to wait for open connections to drain after a shutdown signal
pub const SHUTDOWN_GRACE_PERIOD_SECS: u64 = 30;

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "hello_devops=debug,tower_http=debug";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Default HTML page title
pub const DEFAULT_SITE_NAME: &str = "Hello DevOps";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        5000
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Title shown in the browser tab
    #[serde(default = "UiConfig::default_site_name")]
    pub site_name: String,
    /// Version string, populated at runtime
    #[serde(skip_deserializing, default = "UiConfig::default_version")]
    pub version: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            site_name: Self::default_site_name(),
            version: Self::default_version(),
        }
    }
}

impl UiConfig {
    fn default_site_name() -> String {
        DEFAULT_SITE_NAME.to_string()
    }

    fn default_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable
    Text,
    /// One JSON object per line
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    /// Parse the configured format string.
    pub fn log_format(&self) -> Result<LogFormat, ConfigError> {
        match self.format.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected \"text\" or \"json\"",
                other
            ))),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;

        // Fail at startup rather than when the listener is bound
        config.socket_addr()?;
        config.logging.log_format()?;

        Ok(config)
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.http.host, self.http.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!("Invalid http.host or http.port: {}", e))
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
