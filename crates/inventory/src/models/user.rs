//! User domain types.

use stockroom_core::{Email, Role, UserId};

/// A registered account (domain type).
///
/// The password digest is deliberately absent; it never leaves the
/// repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name given at registration.
    pub name: String,
    /// Login email, unique across accounts.
    pub email: Email,
    /// Role label chosen at registration.
    pub role: Role,
}

/// The caller's authenticated identity.
///
/// Built by the front end from a successful login and handed to every catalog
/// call. There is no token or expiry; holding a `Session` simply means login
/// succeeded earlier in this process.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    /// Wrap the user returned by `AccountService::login`.
    #[must_use]
    pub const fn new(user: User) -> Self {
        Self { user }
    }

    /// The logged-in user.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Identifier used as the `actor` field in log events.
    #[must_use]
    pub fn actor(&self) -> &str {
        self.user.email.as_str()
    }
}
