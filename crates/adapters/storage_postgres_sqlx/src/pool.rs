//! `PostgreSQL` connection pool setup and migration runner.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::error::StorageError;

/// Configuration for the `PostgreSQL` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    /// Upper bound on pooled connections; one is checked out per request.
    pub max_connections: u32,
    /// How long a request waits for a free connection before failing.
    pub acquire_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "roomtemp".to_string(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Translate into sqlx connection options.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        }
    }

    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool and runs all pending migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(self.pool_options(), self.connect_options()).await
    }
}

/// Holds the `PostgreSQL` connection pool and provides access to it.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to the database and run migrations.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or migrations fail.
    pub async fn initialize(
        pool_options: PgPoolOptions,
        connect_options: PgConnectOptions,
    ) -> Result<Self, StorageError> {
        let pool = pool_options.connect_with(connect_options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!("database schema is up to date");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections to be returned, then close them all.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
