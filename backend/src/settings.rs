//! Process configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MANNAH_*` environment variables and an
//! optional config file. The database URL additionally falls back to the
//! conventional `DATABASE_URL` variable.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::persistence::PoolConfig;

/// Fallback environment variable for the connection string.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Startup configuration failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// Neither `MANNAH_DATABASE_URL` nor `DATABASE_URL` is set.
    #[error("database URL missing: set --database-url, MANNAH_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,
    /// A database URL was supplied but is blank.
    #[error("database URL must not be empty")]
    EmptyDatabaseUrl,
    /// The bind address does not parse as `host:port`.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
    /// A duration or size setting is zero.
    #[error("{name} must be greater than zero")]
    Zero { name: &'static str },
}

/// Settings controlling the HTTP server and the database pool.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MANNAH")]
pub struct AppSettings {
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Socket address the server listens on.
    #[ortho_config(default = "0.0.0.0:8000".to_owned())]
    pub bind_addr: String,
    /// Per-request deadline in seconds.
    #[ortho_config(default = 30)]
    pub request_timeout_secs: u64,
    /// Maximum pooled connections.
    #[ortho_config(default = 10)]
    pub pool_max_size: u32,
    /// Pool checkout timeout in seconds.
    #[ortho_config(default = 30)]
    pub pool_connection_timeout_secs: u64,
}

fn non_zero<T: PartialEq + Default>(value: T, name: &'static str) -> Result<T, SettingsError> {
    if value == T::default() {
        Err(SettingsError::Zero { name })
    } else {
        Ok(value)
    }
}

impl AppSettings {
    /// Resolve the database URL, consulting `DATABASE_URL` when unset.
    ///
    /// # Errors
    /// Fails when no URL is configured or the configured one is blank.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        let value = match &self.database_url {
            Some(explicit) => explicit.clone(),
            None => env::var(DATABASE_URL_ENV).map_err(|_| SettingsError::MissingDatabaseUrl)?,
        };
        if value.trim().is_empty() {
            return Err(SettingsError::EmptyDatabaseUrl);
        }
        Ok(value)
    }

    /// Parsed bind address.
    ///
    /// # Errors
    /// Fails when the configured value is not a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: self.bind_addr.clone(),
                message: err.to_string(),
            })
    }

    /// Per-request deadline.
    ///
    /// # Errors
    /// Fails when configured as zero.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        let secs = non_zero(self.request_timeout_secs, "request_timeout_secs")?;
        Ok(Duration::from_secs(secs))
    }

    /// Pool configuration derived from these settings.
    ///
    /// # Errors
    /// Fails when the database URL cannot be resolved or a pool limit is zero.
    pub fn pool_config(&self) -> Result<PoolConfig, SettingsError> {
        let max_size = non_zero(self.pool_max_size, "pool_max_size")?;
        let checkout = non_zero(
            self.pool_connection_timeout_secs,
            "pool_connection_timeout_secs",
        )?;
        Ok(PoolConfig::new(self.database_url()?)
            .with_max_size(max_size)
            .with_connection_timeout(Duration::from_secs(checkout)))
    }
}
