//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! stockroom migrate
//! ```
//!
//! # Environment Variables
//!
//! - `STOCKROOM_DATABASE_URL` - `SQLite` connection string (default `sqlite://stockroom.db`)
//!
//! # Migration Files
//!
//! `crates/inventory/migrations/`, embedded into the binary at build time.

use stockroom_inventory::config::StockroomConfig;
use stockroom_inventory::db;

use super::CliError;

/// Run the bundled migrations against the configured database.
///
/// # Errors
///
/// Returns `CliError::Database` if the database cannot be opened and
/// `CliError::Migration` if a migration fails.
pub async fn run(config: &StockroomConfig) -> Result<(), CliError> {
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database).await?;

    tracing::info!(
        available = db::MIGRATOR.iter().count(),
        "Running migrations..."
    );
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    pool.close().await;
    Ok(())
}
