//! Phone value object.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Separator between the id and the number in a phone token.
pub const PHONE_SEPARATOR: char = ':';

/// An immutable `(id, number)` pair attached to a contact.
///
/// Phones are created fresh for every parsed token and never mutated
/// afterwards; contacts only append or remove them.
///
/// # Example
///
/// ```
/// use agenda::domain::Phone;
///
/// let phone: Phone = "home:555-1234".parse().unwrap();
/// assert_eq!(phone.id(), "home");
/// assert_eq!(phone.number(), "555-1234");
/// assert_eq!(phone.to_string(), "home:555-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone {
    id: String,
    number: String,
}

impl Phone {
    /// Create a phone from its parts. No validation is performed.
    pub fn new(id: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
        }
    }

    /// Get the phone label (e.g. `home`, `work`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the phone number.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Validation hook. No rule is enforced yet, so every phone is valid.
    pub fn is_valid(&self) -> bool {
        true
    }
}

impl FromStr for Phone {
    type Err = ValidationError;

    /// Parse a token of the form `id:number`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MalformedPhoneToken` unless the token holds
    /// exactly one separator.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut parts = token.split(PHONE_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(id), Some(number), None) => Ok(Self::new(id, number)),
            _ => Err(ValidationError::MalformedPhoneToken(token.to_string())),
        }
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.id, PHONE_SEPARATOR, self.number)
    }
}
