//! SQLite adapters - Database implementations for repository ports.
//!
//! - `SqliteSubmissionRepository` - Append-only submission storage

mod migrate;
mod submission_repository;

use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use thiserror::Error;

pub use submission_repository::SqliteSubmissionRepository;

/// Errors raised while opening or migrating the database.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Opens a pool with WAL journaling and a busy timeout on every connection.
///
/// # Errors
///
/// Returns `SqliteInitError` if the connection cannot be established.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, SqliteInitError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA journal_mode = WAL;")
                    .execute(&mut *conn)
                    .await?;
                sqlx::query("PRAGMA busy_timeout = 5000;")
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Creates tables if they do not exist.
///
/// # Errors
///
/// Returns `SqliteInitError` if migration queries fail.
pub async fn migrate(pool: &SqlitePool) -> Result<(), SqliteInitError> {
    migrate::run_migrations(pool).await
}
