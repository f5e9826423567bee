//! Password digests.
//!
//! Passwords are reduced to an unsalted SHA-256 digest, hex-encoded (64
//! lowercase characters). The same input always yields the same digest, which
//! is what lets login match on `email AND password_hash` in a single lookup.

use core::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Length of the hex encoding.
    pub const HEX_LEN: usize = 64;

    /// Hash a plaintext password.
    #[must_use]
    pub fn of(password: &SecretString) -> Self {
        let digest = Sha256::digest(password.expose_secret().as_bytes());
        Self(hex::encode(digest))
    }

    /// The hex string written to the `password_hash` column.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Unsalted digests must stay out of logs.
impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(s: &str) -> PasswordDigest {
        PasswordDigest::of(&SecretString::from(s))
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(
            digest("password").as_str(),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(digest("s3cret!"), digest("s3cret!"));
    }

    #[test]
    fn test_different_inputs_differ() {
        assert_ne!(digest("s3cret!"), digest("s3cret?"));
        assert_ne!(digest("a"), digest("A"));
    }

    #[test]
    fn test_fixed_length_lowercase_hex() {
        for input in ["", "x", "a much longer passphrase with spaces"] {
            let d = digest(input);
            assert_eq!(d.as_str().len(), PasswordDigest::HEX_LEN);
            assert!(
                d.as_str()
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            );
        }
    }

    #[test]
    fn test_debug_is_redacted() {
        let d = digest("password");
        assert!(!format!("{d:?}").contains("5e88"));
    }
}
