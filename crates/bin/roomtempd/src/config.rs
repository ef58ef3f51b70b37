//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `roomtemp.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// `PostgreSQL` settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Seconds before an in-flight request is answered with 408.
    pub request_timeout_secs: u64,
}

/// `PostgreSQL` connection configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Pool size.
    pub max_connections: u32,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `roomtemp.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("roomtemp.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("ROOMTEMP_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("ROOMTEMP_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(secs) = var("ROOMTEMP_REQUEST_TIMEOUT").and_then(|val| val.parse().ok()) {
            self.server.request_timeout_secs = secs;
        }
        if let Some(val) = var("PG_HOST") {
            self.database.host = val;
        }
        if let Some(port) = var("PG_PORT").and_then(|val| val.parse().ok()) {
            self.database.port = port;
        }
        if let Some(val) = var("PG_USER") {
            self.database.user = val;
        }
        if let Some(val) = var("PG_PASSWORD") {
            self.database.password = val;
        }
        if let Some(val) = var("PG_DATABASE") {
            self.database.database = val;
        }
        if let Some(size) = var("ROOMTEMP_DB_MAX_CONNECTIONS").and_then(|val| val.parse().ok()) {
            self.database.max_connections = size;
        }
        if let Some(val) = var("ROOMTEMP_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.server.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request timeout must be non-zero".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database pool needs at least one connection".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_secs)
    }

    /// Settings for the storage adapter.
    #[must_use]
    pub fn storage(&self) -> roomtemp_adapter_storage_postgres_sqlx::Config {
        roomtemp_adapter_storage_postgres_sqlx::Config {
            host: self.database.host.clone(),
            port: self.database.port,
            user: self.database.user.clone(),
            password: self.database.password.clone(),
            database: self.database.database.clone(),
            max_connections: self.database.max_connections,
            ..Default::default()
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 30,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        let storage = roomtemp_adapter_storage_postgres_sqlx::Config::default();
        Self {
            host: storage.host,
            port: storage.port,
            user: storage.user,
            password: storage.password,
            database: storage.database,
            max_connections: storage.max_connections,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "roomtempd=info,roomtemp=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
