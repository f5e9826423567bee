//! Integration tests for Stockroom.
//!
//! Each test gets its own `SQLite` file in a temporary directory, opened the
//! same way the CLI opens its store (pool plus bundled migrations).
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `accounts` - Registration and login
//! - `catalog` - Product list, add, update and delete

use secrecy::SecretString;
use sqlx::SqlitePool;
use tempfile::TempDir;

use stockroom_core::{Email, Role};
use stockroom_inventory::config::DatabaseConfig;
use stockroom_inventory::db::{self, StorageError};
use stockroom_inventory::models::{Session, User};
use stockroom_inventory::{AccountError, AccountService};

/// A freshly migrated store backed by a file in a temporary directory.
///
/// The directory (and database) is removed when this is dropped.
pub struct TestStore {
    pub pool: SqlitePool,
    _dir: TempDir,
}

impl TestStore {
    /// Create an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary directory or database cannot be
    /// created.
    pub async fn new() -> Result<Self, StorageError> {
        let dir = TempDir::new().map_err(sqlx::Error::Io)?;
        let url = format!("sqlite://{}", dir.path().join("stockroom.db").display());
        let pool = db::open(&DatabaseConfig::new(url)).await?;
        Ok(Self { pool, _dir: dir })
    }

    /// Register an account and log it in.
    ///
    /// # Errors
    ///
    /// Returns an error if registration fails.
    pub async fn session(&self, email: &str, role: Role) -> Result<Session, AccountError> {
        let user = self.register("Test User", email, "secret", role).await?;
        Ok(Session::new(user))
    }

    /// Register an account with the given password.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::DuplicateEmail` if the email is taken.
    ///
    /// # Panics
    ///
    /// Panics if `email` is not a valid address.
    #[allow(clippy::expect_used)]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<User, AccountError> {
        let email: Email = email.parse().expect("test email should be valid");
        AccountService::new(&self.pool)
            .register(name, &email, &secret(password), role)
            .await
    }
}

/// Wrap a password literal.
#[must_use]
pub fn secret(password: &str) -> SecretString {
    SecretString::from(password.to_owned())
}
