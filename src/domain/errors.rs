//! Domain validation errors.

use std::fmt;

/// Errors that can occur while building domain value objects from raw tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone token does not split into exactly one id and one number.
    MalformedPhoneToken(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedPhoneToken(token) => write!(f, "malformed phone token '{}'", token),
        }
    }
}

impl std::error::Error for ValidationError {}
