//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. All settings have defaults; the tool runs with no environment
//! at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book snapshot file (default: "addressbook.json")
    pub book_file: PathBuf,

    /// Inclusive upcoming-birthday window in days (default: 7)
    pub birthday_window_days: i64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: snapshot path (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it isn't
        let _ = dotenvy::dotenv();

        let book_file = env::var("CONTACT_BOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("addressbook.json"));

        let birthday_window_days = Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", 7)?;
        if birthday_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_file,
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from("addressbook.json"),
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("CONTACT_BOOK_FILE");
        env::remove_var("BIRTHDAY_WINDOW_DAYS");
        env::remove_var("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.birthday_window_days, 7);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_FILE", "/tmp/book.json");
        guard.set("BIRTHDAY_WINDOW_DAYS", "14");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_file, PathBuf::from("/tmp/book.json"));
        assert_eq!(config.birthday_window_days, 14);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_window() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "soon");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "BIRTHDAY_WINDOW_DAYS");
        }
    }

    #[test]
    #[serial]
    fn test_config_negative_window_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("BIRTHDAY_WINDOW_DAYS", "-1");

        assert!(Config::from_env().is_err());
    }
}
