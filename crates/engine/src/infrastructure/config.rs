//! Engine configuration from the environment.
//!
//! Supported environment variables:
//! - `MOONS_DB`: path to the SQLite catalog (default `moons.db`)
//! - `SERVER_HOST`: bind host (default `0.0.0.0`)
//! - `SERVER_PORT` / `PORT`: bind port (default `5000`)
//! - `PUBLIC_BASE_URL`: externally reachable base URL used in audio cue links
//!   (default `http://localhost:5000`)
//! - `STATIC_DIR`: directory holding the cue audio, map and index page
//!   (default `static`)
//! - `CORS_ALLOWED_ORIGINS`: `*` or a comma separated origin list (unset = no CORS)

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DB_PATH: &str = "moons.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub db_path: PathBuf,
    pub server_host: String,
    pub server_port: u16,
    /// Validated, without a trailing slash.
    pub public_base_url: String,
    pub static_dir: PathBuf,
    pub cors_allowed_origins: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PUBLIC_BASE_URL '{value}' is not a valid http(s) URL: {message}")]
    InvalidBaseUrl { value: String, message: String },
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let server_port = match non_empty("SERVER_PORT").or_else(|| non_empty("PORT")) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_PORT,
                    "SERVER_PORT is not a valid port, using default"
                );
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let base_url =
            non_empty("PUBLIC_BASE_URL").unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string());

        Ok(Self {
            db_path: non_empty("MOONS_DB")
                .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
                .into(),
            server_host: non_empty("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            public_base_url: validate_base_url(&base_url)?,
            static_dir: non_empty("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
            cors_allowed_origins: non_empty("CORS_ALLOWED_ORIGINS"),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.server_host, self.server_port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |message: String| ConfigError::InvalidBaseUrl {
        value: raw.to_string(),
        message,
    };

    let parsed = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query strings and fragments are not allowed".into()));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
