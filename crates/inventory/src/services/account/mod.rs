//! Account service.
//!
//! Registration and password login against the `users` table.

mod error;

pub use error::AccountError;

use secrecy::SecretString;
use sqlx::SqlitePool;

use stockroom_core::{Email, Role};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::user::User;
use crate::password::PasswordDigest;

/// Account service.
///
/// Handles user registration and login.
pub struct AccountService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// The password is stored as its SHA-256 digest. No strength policy is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::DuplicateEmail` if the email is already registered.
    /// Returns `AccountError::Repository` for any other storage failure.
    pub async fn register(
        &self,
        name: &str,
        email: &Email,
        password: &SecretString,
        role: Role,
    ) -> Result<User, AccountError> {
        let password_hash = PasswordDigest::of(password);

        let user = self
            .users
            .create(name, email, &password_hash, role)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AccountError::DuplicateEmail,
                other => AccountError::Repository(other),
            })?;

        tracing::info!(user_id = %user.id, email = %user.email, role = %user.role, "User registered");
        Ok(user)
    }

    /// Log in with email and password.
    ///
    /// Returns `None` when no account matches. An unknown email and a wrong
    /// password are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::Repository` if the lookup fails.
    pub async fn login(
        &self,
        email: &Email,
        password: &SecretString,
    ) -> Result<Option<User>, AccountError> {
        let password_hash = PasswordDigest::of(password);

        let user = self
            .users
            .find_by_credentials(email, &password_hash)
            .await?;

        match &user {
            Some(user) => tracing::info!(user_id = %user.id, "Login succeeded"),
            None => tracing::warn!(email = %email, "Login failed"),
        }

        Ok(user)
    }
}
