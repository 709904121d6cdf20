//! Async-safe connection pool for Diesel SQLite connections.
//!
//! This module wraps `diesel-async` and `bb8` to provide an ergonomic async
//! connection pool for the persistence layer. SQLite itself is synchronous;
//! connections run inside `diesel-async`'s sync connection wrapper, which
//! moves blocking work off the async runtime.
//!
//! # Design
//!
//! - Pool checkout is non-blocking and respects timeout configuration
//! - Every new connection runs the same pragma batch before first use
//! - The database file's parent directory is created on pool construction
//! - All errors are mapped to `PoolError` variants

use std::path::Path;
use std::time::Duration;

use diesel::sqlite::SqliteConnection;
use diesel::{ConnectionError, ConnectionResult};
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

/// SQLite connection type used throughout the persistence layer.
pub type SqliteAsyncConnection = SyncConnectionWrapper<SqliteConnection>;

// busy_timeout queues concurrent writers instead of failing them immediately;
// WAL keeps readers unblocked while a write is in flight.
const CONNECTION_PRAGMAS: &str = "\
    PRAGMA busy_timeout = 5000; \
    PRAGMA journal_mode = WAL; \
    PRAGMA foreign_keys = ON;";

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout { message: String },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build { message: String },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }
}

/// Configuration for the database connection pool.
///
/// # Example
///
/// ```ignore
/// let config = PoolConfig::new("tmp/db.sqlite3")
///     .with_max_size(20)
///     .with_connection_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_path: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the given database file path.
    ///
    /// Uses sensible defaults:
    /// - `max_size`: 10 connections
    /// - `min_idle`: 2 connections
    /// - `connection_timeout`: 30 seconds
    pub fn new(database_path: impl Into<String>) -> Self {
        Self {
            database_path: database_path.into(),
            max_size: 10,
            min_idle: Some(2),
            connection_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the minimum number of idle connections to maintain.
    pub fn with_min_idle(mut self, min_idle: Option<u32>) -> Self {
        self.min_idle = min_idle;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Get the database file path.
    pub fn database_path(&self) -> &str {
        &self.database_path
    }
}

fn establish_with_pragmas(
    database_path: &str,
) -> BoxFuture<'_, ConnectionResult<SqliteAsyncConnection>> {
    async move {
        let mut conn = SqliteAsyncConnection::establish(database_path).await?;
        conn.batch_execute(CONNECTION_PRAGMAS)
            .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

/// Async connection pool for SQLite via Diesel.
///
/// This wrapper provides a simple interface for obtaining pooled connections
/// and executing database operations.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(config).await?;
/// let mut conn = pool.get().await?;
/// // Use conn for Diesel operations...
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<SqliteAsyncConnection>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// The database file's parent directory is created if missing; SQLite
    /// creates the file itself on first open.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the directory or pool cannot be created.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        if let Some(parent) = Path::new(&config.database_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|err| {
                    PoolError::build(format!(
                        "failed to create {}: {err}",
                        parent.display()
                    ))
                })?;
            }
        }

        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(establish_with_pragmas);
        let manager = AsyncDieselConnectionManager::<SqliteAsyncConnection>::new_with_config(
            &config.database_path,
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, SqliteAsyncConnection>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }
}
