//! Account error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during account operations.
///
/// A failed login is not an error; `login` returns `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum AccountError {
    /// The email is already registered.
    #[error("email already in use")]
    DuplicateEmail,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
