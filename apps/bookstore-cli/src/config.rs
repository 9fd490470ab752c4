//! Ledger configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::path::PathBuf;

use bookstore_core::DEFAULT_DATABASE_FILE;

/// Overrides where the ledger file lives.
pub const DB_PATH_VAR: &str = "BOOKSTORE_DB_PATH";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite file holding `member`, `book` and `sale`.
    pub database_path: PathBuf,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which plays the role of the
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_path = match lookup(DB_PATH_VAR) {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::InvalidValue(DB_PATH_VAR.to_string()));
            }
            Some(value) => PathBuf::from(value),
            None => PathBuf::from(DEFAULT_DATABASE_FILE),
        };

        Ok(AppConfig { database_path })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_path, PathBuf::from("bookstore.db"));
    }

    #[test]
    fn test_override_path() {
        let config = AppConfig::from_lookup(|key| {
            (key == DB_PATH_VAR).then(|| "/var/lib/ledger/shop.db".to_string())
        })
        .unwrap();
        assert_eq!(config.database_path, PathBuf::from("/var/lib/ledger/shop.db"));
    }

    #[test]
    fn test_blank_override_is_rejected() {
        let err = AppConfig::from_lookup(|_| Some("  ".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref var) if var == DB_PATH_VAR));
    }
}
