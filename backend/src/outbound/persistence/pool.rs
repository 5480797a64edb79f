//! Async connection pool for Diesel SQLite connections.
//!
//! SQLite connections are synchronous, so each one is wrapped in
//! `diesel-async`'s `SyncConnectionWrapper`, which runs queries on the
//! blocking thread pool. `bb8` handles checkout and lifecycle.
//!
//! Every new connection sets `PRAGMA busy_timeout` so concurrent writers wait
//! for the file lock instead of failing immediately. It also sets
//! `PRAGMA foreign_keys = OFF`, undoing the `ON` that Diesel issues when it
//! connects.

use std::time::Duration;

use diesel::ConnectionError;
use diesel::ConnectionResult;
use diesel::sqlite::SqliteConnection;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use diesel_async::pooled_connection::{AsyncDieselConnectionManager, ManagerConfig};
use diesel_async::sync_connection_wrapper::SyncConnectionWrapper;
use diesel_async::{AsyncConnection, SimpleAsyncConnection};
use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::debug;

/// Pooled SQLite connection type used by the repositories.
pub(crate) type SqliteConn = SyncConnectionWrapper<SqliteConnection>;

/// Milliseconds a connection waits on a locked database file.
const BUSY_TIMEOUT_MS: u64 = 5_000;

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
/// ```
/// use std::time::Duration;
/// use campus_food::outbound::persistence::PoolConfig;
///
/// let config = PoolConfig::new("./database.db")
///     .with_max_size(8)
///     .with_connection_timeout(Duration::from_secs(10));
/// assert_eq!(config.database_url(), "./database.db");
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_url: String,
    max_size: u32,
    min_idle: Option<u32>,
    connection_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the given SQLite file path.
    ///
    /// Defaults: 4 connections, no idle floor, 30 second checkout timeout.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_size: 4,
            min_idle: None,
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

    /// SQLite file path (or `:memory:`).
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn establish_connection(url: &str) -> BoxFuture<'_, ConnectionResult<SqliteConn>> {
    async move {
        let mut conn = SqliteConn::establish(url).await?;
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {BUSY_TIMEOUT_MS}; PRAGMA foreign_keys = OFF;"
        ))
        .await
            .map_err(ConnectionError::CouldntSetupConfiguration)?;
        Ok(conn)
    }
    .boxed()
}

/// Async connection pool for SQLite via Diesel.
///
/// Cloning is cheap; clones share the same underlying pool.
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<SqliteConn>,
}

impl DbPool {
    /// Open the database file (creating it if needed) and build the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the first connection cannot be opened.
    pub async fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let mut manager_config = ManagerConfig::default();
        manager_config.custom_setup = Box::new(establish_connection);
        let manager = AsyncDieselConnectionManager::<SqliteConn>::new_with_config(
            &config.database_url,
            manager_config,
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .min_idle(config.min_idle)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| PoolError::build(err.to_string()))?;

        // bb8 builds lazily when `min_idle` is unset; open one connection so a
        // bad path fails at startup rather than on the first request.
        drop(
            pool.get()
                .await
                .map_err(|err| PoolError::build(err.to_string()))?,
        );

        Ok(Self { inner: pool })
    }

    /// Get a connection from the pool.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` if a connection cannot be obtained within
    /// the configured timeout.
    pub async fn get(&self) -> Result<PooledConnection<'_, SqliteConn>, PoolError> {
        self.inner
            .get()
            .await
            .map_err(|err| PoolError::checkout(err.to_string()))
    }

    /// Log the pool state and drop this handle.
    ///
    /// This does not close connections held through other clones. They close
    /// once the last clone is dropped, so call it after the server has
    /// stopped and released the repositories.
    pub fn release(self) {
        let state = self.inner.state();
        debug!(
            connections = state.connections,
            idle = state.idle_connections,
            "releasing database pool handle"
        );
        drop(self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn pool_config_default_values() {
        let config = PoolConfig::new("./database.db");

        assert_eq!(config.database_url(), "./database.db");
        assert_eq!(config.max_size, 4);
        assert_eq!(config.min_idle, None);
        assert_eq!(config.connection_timeout, Duration::from_secs(30));
    }

    #[rstest]
    fn pool_config_builder_pattern() {
        let config = PoolConfig::new(":memory:")
            .with_max_size(1)
            .with_min_idle(Some(1))
            .with_connection_timeout(Duration::from_secs(5));

        assert_eq!(config.max_size, 1);
        assert_eq!(config.min_idle, Some(1));
        assert_eq!(config.connection_timeout, Duration::from_secs(5));
    }

    #[rstest]
    fn pool_error_display() {
        assert!(
            PoolError::checkout("timed out")
                .to_string()
                .contains("timed out")
        );
        assert!(
            PoolError::build("unable to open database file")
                .to_string()
                .contains("unable to open")
        );
    }

    #[tokio::test]
    async fn in_memory_pool_hands_out_connections() {
        let pool = DbPool::new(PoolConfig::new(":memory:").with_max_size(1))
            .await
            .expect("in-memory pool");

        let mut conn = pool.get().await.expect("checkout");
        conn.batch_execute("SELECT 1;").await.expect("query");
        drop(conn);

        pool.release();
    }

    #[tokio::test]
    async fn released_handle_leaves_clones_usable() {
        let pool = DbPool::new(PoolConfig::new(":memory:").with_max_size(1))
            .await
            .expect("in-memory pool");
        let clone = pool.clone();

        pool.release();

        let mut conn = clone.get().await.expect("checkout after release");
        conn.batch_execute("SELECT 1;").await.expect("query");
    }

    #[tokio::test]
    async fn connections_do_not_enforce_foreign_keys() {
        let pool = DbPool::new(PoolConfig::new(":memory:").with_max_size(1))
            .await
            .expect("in-memory pool");
        let mut conn = pool.get().await.expect("checkout");

        conn.batch_execute(
            "CREATE TABLE parent (id TEXT PRIMARY KEY);
             CREATE TABLE child (parent_id TEXT REFERENCES parent(id));
             INSERT INTO child (parent_id) VALUES ('missing');",
        )
        .await
        .expect("orphan row is accepted");
    }
}
