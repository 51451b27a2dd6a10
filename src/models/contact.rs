//! Contact model representing a person in the agenda.

use crate::domain::Phone;
use std::fmt;

/// A named entry with a favorite flag and an ordered list of phones.
///
/// Phones keep insertion order and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: String,
    favorited: bool,
    phones: Vec<Phone>,
}

impl Contact {
    /// Create a new, non-favorited contact with no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            favorited: false,
            phones: Vec::new(),
        }
    }

    /// Append a phone to the end of the list. Phones are not validated here.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Remove the phone at `index`, shifting later phones down.
    ///
    /// Out-of-range indices are ignored.
    pub fn rm_phone(&mut self, index: usize) {
        if index < self.phones.len() {
            self.phones.remove(index);
        }
    }

    /// Flip the favorite flag.
    pub fn toggle_favorited(&mut self) {
        self.favorited = !self.favorited;
    }

    pub fn is_favorited(&self) -> bool {
        self.favorited
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Live, mutable view of the phone list.
    ///
    /// Changes made through this borrow are changes to the contact itself.
    pub fn phones_mut(&mut self) -> &mut Vec<Phone> {
        &mut self.phones
    }

    /// Consume the contact, keeping only its phones.
    pub fn into_phones(self) -> Vec<Phone> {
        self.phones
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the contact.
    ///
    /// An [`Agenda`](super::Agenda) never renames its contacts; renaming one
    /// that is already stored may break the one-contact-per-name rule.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", phone)?;
        }
        f.write_str("]")
    }
}
