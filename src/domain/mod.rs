//! Domain value objects and types.
//!
//! This module contains the value objects that make up a contact entry.
//! They are built from raw command tokens and reject tokens that cannot be
//! represented.

pub mod errors;
pub mod phone;

pub use errors::ValidationError;
pub use phone::Phone;
