use std::path::Path;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Opens the jobs database. Each store call checks a connection out for a
/// single statement; SQLite serializes writers on its own.
pub async fn create_pool(db_path: &Path) -> Result<SqlitePool> {
    info!("Opening SQLite database at {}", db_path.display());

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open SQLite database at {}", db_path.display()))?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Single-connection in-memory pool for tests. The connection is never
/// recycled, otherwise the database would vanish with it.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}
