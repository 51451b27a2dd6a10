//! Error types for the agenda shell.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while parsing or executing a shell command.
#[derive(Error, Debug)]
pub enum ShellError {
    /// A phone argument could not be split into id and number
    #[error("malformed phone token '{0}'")]
    MalformedPhoneToken(String),

    /// The first token is not a known command
    #[error("invalid command")]
    UnknownCommand(String),

    /// The line holds no tokens at all
    #[error("empty command")]
    EmptyLine,

    /// A required positional argument is absent
    #[error("missing argument '{argument}' for '{command}'")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// A phone index is not an integer
    #[error("invalid index '{0}'")]
    InvalidIndex(String),

    /// The named contact does not exist
    #[error("contact '{0}' not found")]
    ContactNotFound(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Whether the loop may keep going after reporting this error.
    ///
    /// Unknown commands are always recoverable. I/O failures never are.
    pub fn is_always_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCommand(_))
    }
}

impl From<ValidationError> for ShellError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MalformedPhoneToken(token) => Self::MalformedPhoneToken(token),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ShellError
pub type ShellResult<T> = Result<T, ShellError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
