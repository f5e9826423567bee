//! Database operations for the embedded `SQLite` store.
//!
//! ## Tables
//!
//! - `users` - Registered accounts (name, unique email, password digest, role)
//! - `products` - Product catalog
//!
//! # Migrations
//!
//! Migrations are stored in `crates/inventory/migrations/`, embedded at compile
//! time, and applied by [`open`] (every table uses `CREATE TABLE IF NOT EXISTS`,
//! so reapplying is harmless). They can also be run on their own:
//! ```bash
//! cargo run -p stockroom-cli -- migrate
//! ```

pub mod products;
pub mod users;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use products::ProductRepository;
pub use users::UserRepository;

use crate::config::DatabaseConfig;

/// Schema migrations bundled into the binary.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Errors that can occur while opening the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The connection string is malformed or the file cannot be opened.
    #[error("cannot connect to database: {0}")]
    Connect(#[from] sqlx::Error),

    /// Applying the bundled migrations failed.
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create a `SQLite` connection pool.
///
/// The database file is created if it does not exist yet. Connections are
/// handed out per operation and returned straight after the statement runs.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the file cannot be opened.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(config.url())?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the applied history does
/// not match the bundled files.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Open the store: connect, then bring the schema up to date.
///
/// # Errors
///
/// Returns `StorageError` if either step fails.
pub async fn open(config: &DatabaseConfig) -> Result<SqlitePool, StorageError> {
    let pool = create_pool(config).await?;
    run_migrations(&pool).await?;
    tracing::debug!(
        max_connections = config.max_connections,
        "Storage opened"
    );
    Ok(pool)
}

/// Map a unique-constraint failure to `RepositoryError::Conflict`.
fn conflict_or_database(e: sqlx::Error, what: &str) -> RepositoryError {
    if let sqlx::Error::Database(ref db_err) = e
        && db_err.is_unique_violation()
    {
        return RepositoryError::Conflict(format!("{what} already exists"));
    }
    RepositoryError::Database(e)
}
