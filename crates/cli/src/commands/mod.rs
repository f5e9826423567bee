//! Subcommand implementations.

pub mod account;
pub mod migrate;
pub mod product;
pub mod seed;

use thiserror::Error;

use stockroom_core::{Email, ProductId};
use stockroom_inventory::AccountError;
use stockroom_inventory::config::ConfigError;
use stockroom_inventory::db::{RepositoryError, StorageError};

/// Errors that end a command with a non-zero exit status.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Opening the store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Database connection error.
    #[error("database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A catalog operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// An account operation failed.
    #[error(transparent)]
    Account(#[from] AccountError),

    /// Registration with an email that is already taken.
    #[error("email already in use: {0}")]
    EmailInUse(Email),

    /// No account matches the email and password.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The selected product does not exist.
    #[error("no product with id {0}")]
    ProductNotFound(ProductId),

    /// A file could not be read.
    #[error("cannot read {path}: {source}")]
    ReadFile {
        /// Path given on the command line.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The seed file is not valid YAML for a product list.
    #[error("invalid seed file: {0}")]
    SeedFormat(#[from] serde_yaml::Error),

    /// The seed file parsed but some entries break the form rules.
    #[error("{0} invalid product entries in seed file")]
    InvalidSeed(usize),

    /// JSON output could not be produced.
    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}
