//! Data models for the address book.
//!
//! An [`Agenda`] owns every [`Contact`], and each contact owns its phones.

pub mod agenda;
pub mod contact;

pub use agenda::Agenda;
pub use contact::Contact;
