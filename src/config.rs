//! Configuration management for the agenda shell.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honored if present; nothing is ever printed to stdout while
//! loading, since stdout carries the command transcript.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// What the shell does when a command fails for a reason other than an
/// unknown verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Print `fail: <reason>` and keep reading commands.
    #[default]
    Report,

    /// Stop the loop and surface the error to the caller.
    Abort,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(Self::Report),
            "abort" => Ok(Self::Abort),
            other => Err(format!("Must be 'report' or 'abort', got: {}", other)),
        }
    }
}

/// Configuration for the agenda shell.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Failure handling for malformed commands (default: report)
    pub error_policy: ErrorPolicy,

    /// Echo every input line as `$<line>` (default: true)
    pub echo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `AGENDA_LOG_LEVEL`: Logging level (default: "error")
    /// - `AGENDA_ERROR_POLICY`: `report` or `abort` (default: "report")
    /// - `AGENDA_ECHO`: Echo input lines (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = env::var("AGENDA_LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let error_policy = match env::var("AGENDA_ERROR_POLICY") {
            Ok(val) => val
                .parse::<ErrorPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "AGENDA_ERROR_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => ErrorPolicy::default(),
        };

        let echo = Self::parse_env_bool("AGENDA_ECHO", true)?;

        Ok(Config {
            log_level,
            error_policy,
            echo,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            error_policy: ErrorPolicy::Report,
            echo: true,
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
        assert_eq!(config.log_level, "error");
        assert_eq!(config.error_policy, ErrorPolicy::Report);
        assert!(config.echo);
    }

    #[test]
    fn test_error_policy_parse() {
        assert_eq!("report".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Report));
        assert_eq!(" ABORT ".parse::<ErrorPolicy>(), Ok(ErrorPolicy::Abort));
        assert!("crash".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("AGENDA_LOG_LEVEL", "debug");
        guard.set("AGENDA_ERROR_POLICY", "abort");
        guard.set("AGENDA_ECHO", "false");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.error_policy, ErrorPolicy::Abort);
        assert!(!config.echo);
    }

    #[test]
    #[serial]
    fn test_config_invalid_error_policy() {
        let mut guard = EnvGuard::new();
        guard.set("AGENDA_ERROR_POLICY", "explode");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "AGENDA_ERROR_POLICY");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_AGENDA_BOOL", "yes");

        assert!(Config::parse_env_bool("TEST_AGENDA_BOOL", false).unwrap());
        assert!(!Config::parse_env_bool("NONEXISTENT_AGENDA_BOOL", false).unwrap());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_AGENDA_BOOL_INVALID", "maybe");

        let result = Config::parse_env_bool("TEST_AGENDA_BOOL_INVALID", true);
        assert!(result.is_err());
    }
}
