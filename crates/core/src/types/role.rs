//! Account role labels.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a role label is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid role '{0}': expected one of Admin, User")]
pub struct RoleError(pub String);

/// Role chosen at registration.
///
/// Stored as a label only; nothing in the services branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Shop administrator.
    Admin,
    /// Regular staff account.
    #[default]
    User,
}

impl Role {
    /// All selectable roles, in the order the registration form offers them.
    pub const ALL: [Self; 2] = [Self::Admin, Self::User];

    /// The label written to the `role` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleError;

    /// Case-insensitive, so both stored labels and lowercase CLI values parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RoleError(s.to_owned()))
    }
}
