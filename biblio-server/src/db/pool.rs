//! SQLite connection pool management and schema bootstrap

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-tenant deployments.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open the SQLite database at `path`, creating the file if it does not
/// exist, and return a connection pool.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or created.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(Path::new("books.db")).await?;
/// run_migrations(&pool).await?;
/// ```
pub async fn create_pool(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_with(options)
        .await
}

/// Ensure the `book` table exists.
///
/// Idempotent: safe to run on every startup, whether or not the table is
/// already there. Must complete before the server starts accepting
/// traffic.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS book (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL,
            year INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("database migrations complete");
    Ok(())
}
