//! Stockroom configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOCKROOM_DATABASE_URL` - `SQLite` connection string (falls back to
//!   `DATABASE_URL`, then `sqlite://stockroom.db`)
//! - `STOCKROOM_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `STOCKROOM_ACQUIRE_TIMEOUT_SECS` - Pool acquire timeout (default: 10)
//! - `STOCKROOM_LOG_FORMAT` - `text` or `json` (default: text)

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://stockroom.db";
const DEFAULT_MAX_CONNECTIONS: &str = "5";
const DEFAULT_ACQUIRE_TIMEOUT_SECS: &str = "10";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Stockroom application configuration.
#[derive(Debug, Clone)]
pub struct StockroomConfig {
    /// Storage settings
    pub database: DatabaseConfig,
    /// Log output format
    pub log_format: LogFormat,
}

/// Storage connection settings.
///
/// Implements `Debug` manually to redact the connection string.
#[derive(Clone)]
pub struct DatabaseConfig {
    /// `SQLite` connection string (may embed credentials for remote VFS setups)
    pub url: SecretString,
    /// Maximum pooled connections
    pub max_connections: u32,
    /// How long an operation waits for a free connection
    pub acquire_timeout: Duration,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl DatabaseConfig {
    /// Settings for `url` with default pool limits.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: SecretString::from(url.into()),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }

    /// The connection string.
    #[must_use]
    pub fn url(&self) -> &str {
        self.url.expose_secret()
    }
}

impl StockroomConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("STOCKROOM_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        let max_connections = parse_var(
            &lookup,
            "STOCKROOM_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "STOCKROOM_MAX_CONNECTIONS".to_owned(),
                "must be at least 1".to_owned(),
            ));
        }

        let acquire_timeout_secs: u64 = parse_var(
            &lookup,
            "STOCKROOM_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?;

        let log_format = match lookup("STOCKROOM_LOG_FORMAT")
            .unwrap_or_default()
            .to_ascii_lowercase()
            .as_str()
        {
            "" | "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::InvalidEnvVar(
                    "STOCKROOM_LOG_FORMAT".to_owned(),
                    format!("expected 'text' or 'json', got '{other}'"),
                ));
            }
        };

        Ok(Self {
            database: DatabaseConfig {
                url: SecretString::from(url),
                max_connections,
                acquire_timeout: Duration::from_secs(acquire_timeout_secs),
            },
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable, substituting `default` when unset.
fn parse_var<F, T>(lookup: &F, key: &str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .unwrap_or_else(|| default.to_owned())
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StockroomConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        StockroomConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.database.url(), DEFAULT_DATABASE_URL);
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(10));
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_primary_url_wins_over_fallback() {
        let config = load(&[
            ("STOCKROOM_DATABASE_URL", "sqlite://primary.db"),
            ("DATABASE_URL", "sqlite://fallback.db"),
        ])
        .unwrap();
        assert_eq!(config.database.url(), "sqlite://primary.db");

        let config = load(&[("DATABASE_URL", "sqlite://fallback.db")]).unwrap();
        assert_eq!(config.database.url(), "sqlite://fallback.db");
    }

    #[test]
    fn test_pool_settings() {
        let config = load(&[
            ("STOCKROOM_MAX_CONNECTIONS", "1"),
            ("STOCKROOM_ACQUIRE_TIMEOUT_SECS", "30"),
        ])
        .unwrap();
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_numbers() {
        let err = load(&[("STOCKROOM_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOCKROOM_MAX_CONNECTIONS"));

        assert!(load(&[("STOCKROOM_MAX_CONNECTIONS", "0")]).is_err());
        assert!(load(&[("STOCKROOM_ACQUIRE_TIMEOUT_SECS", "-1")]).is_err());
    }

    #[test]
    fn test_log_format() {
        assert_eq!(
            load(&[("STOCKROOM_LOG_FORMAT", "JSON")]).unwrap().log_format,
            LogFormat::Json
        );
        assert!(load(&[("STOCKROOM_LOG_FORMAT", "yaml")]).is_err());
    }

    #[test]
    fn test_debug_redacts_url() {
        let config = DatabaseConfig::new("sqlite://secret-path.db");
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-path"));
    }
}
