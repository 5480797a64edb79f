//! Idempotent creation of the `users` and `orders` tables at startup.

use diesel_async::SimpleAsyncConnection;
use tracing::info;

use super::pool::{DbPool, PoolError};

/// DDL applied on every startup. Existing tables and rows are left untouched.
pub(crate) const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS users (
    matric_number TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    department TEXT NOT NULL,
    college TEXT NOT NULL,
    level TEXT NOT NULL,
    hostel TEXT NOT NULL,
    password TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    matric_number TEXT NOT NULL,
    foods TEXT NOT NULL,
    FOREIGN KEY (matric_number) REFERENCES users (matric_number)
);
";

/// Failure while preparing the record store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("failed to create tables: {message}")]
    Ddl { message: String },
}

/// Create the tables if they do not already exist.
///
/// # Errors
///
/// Returns [`SchemaError`] when no connection is available or the DDL fails.
pub async fn ensure_schema(pool: &DbPool) -> Result<(), SchemaError> {
    let mut conn = pool.get().await?;
    conn.batch_execute(SCHEMA_SQL)
        .await
        .map_err(|err| SchemaError::Ddl {
            message: err.to_string(),
        })?;
    info!("record store schema ready");
    Ok(())
}
