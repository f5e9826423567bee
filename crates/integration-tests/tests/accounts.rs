//! Integration tests for account registration and login.

#![allow(clippy::unwrap_used)]

use stockroom_core::{Email, Role};
use stockroom_integration_tests::{TestStore, secret};
use stockroom_inventory::{AccountError, AccountService};

fn email(s: &str) -> Email {
    s.parse().unwrap()
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_returns_stored_user() {
    let store = TestStore::new().await.unwrap();

    let user = store
        .register("Mario Rossi", "mario@example.com", "hunter2", Role::Admin)
        .await
        .unwrap();

    assert_eq!(user.name, "Mario Rossi");
    assert_eq!(user.email, email("mario@example.com"));
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn test_register_assigns_distinct_ids() {
    let store = TestStore::new().await.unwrap();

    let first = store
        .register("A", "a@example.com", "pw", Role::User)
        .await
        .unwrap();
    let second = store
        .register("B", "b@example.com", "pw", Role::User)
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let store = TestStore::new().await.unwrap();

    store
        .register("First", "dup@example.com", "one", Role::User)
        .await
        .unwrap();
    let err = store
        .register("Second", "dup@example.com", "two", Role::Admin)
        .await
        .unwrap_err();

    assert!(matches!(err, AccountError::DuplicateEmail));

    // The original account is untouched
    let user = AccountService::new(&store.pool)
        .login(&email("dup@example.com"), &secret("one"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.name, "First");
}

#[tokio::test]
async fn test_email_uniqueness_is_case_sensitive() {
    let store = TestStore::new().await.unwrap();

    store
        .register("Lower", "case@example.com", "pw", Role::User)
        .await
        .unwrap();
    let upper = store
        .register("Upper", "Case@example.com", "pw", Role::User)
        .await;

    assert!(upper.is_ok());
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_login_with_correct_password() {
    let store = TestStore::new().await.unwrap();
    let registered = store
        .register("Mario", "mario@example.com", "hunter2", Role::User)
        .await
        .unwrap();

    let user = AccountService::new(&store.pool)
        .login(&email("mario@example.com"), &secret("hunter2"))
        .await
        .unwrap();

    assert_eq!(user, Some(registered));
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let store = TestStore::new().await.unwrap();
    store
        .register("Mario", "mario@example.com", "hunter2", Role::User)
        .await
        .unwrap();

    let accounts = AccountService::new(&store.pool);
    for attempt in ["hunter3", "Hunter2", "", "hunter2 "] {
        let user = accounts
            .login(&email("mario@example.com"), &secret(attempt))
            .await
            .unwrap();
        assert!(user.is_none(), "password {attempt:?} should not match");
    }
}

#[tokio::test]
async fn test_login_needs_email_and_password_of_same_account() {
    let store = TestStore::new().await.unwrap();
    let anna = store
        .register("Anna", "anna@example.com", "anna-pw", Role::User)
        .await
        .unwrap();
    let bruno = store
        .register("Bruno", "bruno@example.com", "bruno-pw", Role::Admin)
        .await
        .unwrap();
    let accounts = AccountService::new(&store.pool);

    // Each email only opens with its own password
    let crossed = accounts
        .login(&email("bruno@example.com"), &secret("anna-pw"))
        .await
        .unwrap();
    assert!(crossed.is_none());
    let crossed = accounts
        .login(&email("anna@example.com"), &secret("bruno-pw"))
        .await
        .unwrap();
    assert!(crossed.is_none());

    let own = accounts
        .login(&email("anna@example.com"), &secret("anna-pw"))
        .await
        .unwrap();
    assert_eq!(own, Some(anna));
    let own = accounts
        .login(&email("bruno@example.com"), &secret("bruno-pw"))
        .await
        .unwrap();
    assert_eq!(own, Some(bruno));
}

#[tokio::test]
async fn test_login_unknown_email_fails() {
    let store = TestStore::new().await.unwrap();

    let user = AccountService::new(&store.pool)
        .login(&email("nobody@example.com"), &secret("anything"))
        .await
        .unwrap();

    assert!(user.is_none());
}

#[tokio::test]
async fn test_empty_password_round_trips() {
    let store = TestStore::new().await.unwrap();
    store
        .register("Blank", "blank@example.com", "", Role::User)
        .await
        .unwrap();

    let user = AccountService::new(&store.pool)
        .login(&email("blank@example.com"), &secret(""))
        .await
        .unwrap();

    assert!(user.is_some());
}
