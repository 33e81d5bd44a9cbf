//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "stadium_service=debug,api_server=debug,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid socket address: {value}")]
    InvalidBindAddr { name: &'static str, value: String },

    #[error("unsupported database url scheme: {0}")]
    UnsupportedDatabaseUrl(String),
}

/// Store backend implied by the `DATABASE_URL` scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackend {
    Postgres,
    Sqlite,
}

impl DatabaseBackend {
    pub fn from_url(database_url: &str) -> Result<Self, ConfigError> {
        let scheme = database_url.split(':').next().unwrap_or_default();
        match scheme {
            "postgres" | "postgresql" => Ok(DatabaseBackend::Postgres),
            "sqlite" => Ok(DatabaseBackend::Sqlite),
            other => Err(ConfigError::UnsupportedDatabaseUrl(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_backend: DatabaseBackend,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads the configuration, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let database_url = database_url()?;
        Ok(Self {
            database_backend: DatabaseBackend::from_url(&database_url)?,
            database_url,
            bind_addr: bind_addr()?,
        })
    }
}

/// Database URL must be provided (no default) for safety.
pub fn database_url() -> Result<String, ConfigError> {
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing("DATABASE_URL"))
}

/// Listener address, `0.0.0.0:3000` unless `BIND_ADDR` says otherwise.
pub fn bind_addr() -> Result<SocketAddr, ConfigError> {
    let value = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    value.parse().map_err(|_| ConfigError::InvalidBindAddr {
        name: "BIND_ADDR",
        value,
    })
}
