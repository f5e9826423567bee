//! Registration and login commands.
//!
//! # Usage
//!
//! ```bash
//! stockroom register -n "Mario Rossi" -e mario@example.com -p hunter2 -r admin
//! stockroom login -e mario@example.com -p hunter2
//! ```

use secrecy::SecretString;
use sqlx::SqlitePool;

use stockroom_core::{Email, Role};
use stockroom_inventory::config::StockroomConfig;
use stockroom_inventory::db;
use stockroom_inventory::models::Session;
use stockroom_inventory::{AccountError, AccountService};

use super::CliError;

/// Register a new account.
///
/// # Errors
///
/// Returns `CliError::EmailInUse` if the email is taken, or a storage error.
pub async fn register(
    config: &StockroomConfig,
    name: &str,
    email: &Email,
    password: String,
    role: Role,
) -> Result<(), CliError> {
    let pool = db::open(&config.database).await?;
    let password = SecretString::from(password);

    let user = AccountService::new(&pool)
        .register(name, email, &password, role)
        .await
        .map_err(|e| match e {
            AccountError::DuplicateEmail => CliError::EmailInUse(email.clone()),
            other => CliError::Account(other),
        })?;

    #[allow(clippy::print_stdout)]
    {
        println!(
            "Registration complete for {} ({}). You can now log in.",
            user.email, user.role
        );
    }
    Ok(())
}

/// Check credentials and greet the user.
///
/// # Errors
///
/// Returns `CliError::InvalidCredentials` if no account matches.
pub async fn login(
    config: &StockroomConfig,
    email: Email,
    password: String,
) -> Result<(), CliError> {
    let pool = db::open(&config.database).await?;
    let session = authenticate(&pool, email, password).await?;
    let user = session.user();

    #[allow(clippy::print_stdout)]
    {
        println!("Welcome, {}! (role: {})", user.name, user.role);
    }
    Ok(())
}

/// Log in and wrap the result in a [`Session`] for catalog calls.
///
/// # Errors
///
/// Returns `CliError::InvalidCredentials` if no account matches, or a
/// storage error.
pub async fn authenticate(
    pool: &SqlitePool,
    email: Email,
    password: String,
) -> Result<Session, CliError> {
    let password = SecretString::from(password);

    AccountService::new(pool)
        .login(&email, &password)
        .await?
        .map(Session::new)
        .ok_or(CliError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_support::{EMAIL, PASSWORD, TempStore};

    fn email(s: &str) -> Email {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_register_twice_reports_email_in_use() {
        let store = TempStore::new();

        register(&store.config, "Mario", &email(EMAIL), PASSWORD.to_owned(), Role::User)
            .await
            .unwrap();
        let err = register(&store.config, "Luigi", &email(EMAIL), "other".to_owned(), Role::Admin)
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::EmailInUse(ref taken) if *taken == email(EMAIL)));
        assert_eq!(err.to_string(), format!("email already in use: {EMAIL}"));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_invalid_credentials() {
        let store = TempStore::new();
        register(&store.config, "Mario", &email(EMAIL), PASSWORD.to_owned(), Role::User)
            .await
            .unwrap();

        let err = login(&store.config, email(EMAIL), "hunter3".to_owned())
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::InvalidCredentials));
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_invalid_credentials() {
        let store = TempStore::new();

        let err = login(&store.config, email("nobody@example.com"), PASSWORD.to_owned())
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_builds_session_for_user() {
        let store = TempStore::new();
        let pool = store.pool().await;
        register(&store.config, "Mario", &email(EMAIL), PASSWORD.to_owned(), Role::Admin)
            .await
            .unwrap();

        let session = authenticate(&pool, email(EMAIL), PASSWORD.to_owned())
            .await
            .unwrap();

        assert_eq!(session.user().name, "Mario");
        assert_eq!(session.user().role, Role::Admin);
        assert_eq!(session.actor(), EMAIL);
    }
}
