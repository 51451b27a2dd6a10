//! Agenda aggregate owning every contact.

use super::contact::Contact;
use crate::domain::Phone;
use std::fmt;

/// Prefix for a favorited contact line.
pub const FAVORITE_MARK: &str = "@ ";

/// Prefix for a regular contact line.
pub const REGULAR_MARK: &str = "- ";

/// Collection of contacts, unique by exact (case-sensitive) name.
///
/// Internal storage keeps insertion order. Every view handed out is sorted by
/// name instead.
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    contacts: Vec<Contact>,
}

impl Agenda {
    pub fn new() -> Self {
        Self::default()
    }

    /// All contacts sorted ascending by name. Ties keep storage order.
    pub fn contacts(&self) -> Vec<&Contact> {
        let mut sorted: Vec<&Contact> = self.contacts.iter().collect();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Position of the first stored contact named `name`.
    pub fn find_pos_by_name(&self, name: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.name() == name)
    }

    pub fn get_contact(&self, name: &str) -> Option<&Contact> {
        self.find_pos_by_name(name).map(|pos| &self.contacts[pos])
    }

    pub fn get_contact_mut(&mut self, name: &str) -> Option<&mut Contact> {
        let pos = self.find_pos_by_name(name)?;
        self.contacts.get_mut(pos)
    }

    /// Add phones to the contact named `name`, creating it if needed.
    ///
    /// Phones for an existing contact are appended, never replaced or
    /// deduplicated. New contacts go to the end of storage.
    pub fn add_contact<I>(&mut self, name: &str, phones: I)
    where
        I: IntoIterator<Item = Phone>,
    {
        if let Some(contact) = self.get_contact_mut(name) {
            for phone in phones {
                contact.add_phone(phone);
            }
            return;
        }

        let mut contact = Contact::new(name);
        for phone in phones {
            contact.add_phone(phone);
        }
        self.contacts.push(contact);
    }

    /// Remove the contact named `name`, returning it if it existed.
    pub fn rm_contact(&mut self, name: &str) -> Option<Contact> {
        let pos = self.find_pos_by_name(name)?;
        Some(self.contacts.remove(pos))
    }

    /// Name-sorted `"- {contact}"` lines for every contact whose rendered
    /// form contains `pattern` as a literal substring.
    ///
    /// Returns an empty string when nothing matches.
    pub fn search(&self, pattern: &str) -> String {
        self.contacts()
            .into_iter()
            .map(|c| c.to_string())
            .filter(|rendered| rendered.contains(pattern))
            .map(|rendered| format!("{}{}", REGULAR_MARK, rendered))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Favorited contacts, sorted by name.
    pub fn favorited(&self) -> Vec<&Contact> {
        self.contacts()
            .into_iter()
            .filter(|c| c.is_favorited())
            .collect()
    }

    /// Toggle the favorite flag of `name`. Absent names are ignored.
    pub fn favorite_contact(&mut self, name: &str) {
        if let Some(contact) = self.get_contact_mut(name) {
            contact.toggle_favorited();
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl fmt::Display for Agenda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, contact) in self.contacts().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let mark = if contact.is_favorited() {
                FAVORITE_MARK
            } else {
                REGULAR_MARK
            };
            write!(f, "{}{}", mark, contact)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(token: &str) -> Phone {
        token.parse().unwrap()
    }

    fn names(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_add_contact_merges_phones() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Ann", vec![phone("a:1")]);
        agenda.add_contact("Ann", vec![phone("b:2"), phone("a:1")]);
        agenda.add_contact("Ann", Vec::new());

        assert_eq!(agenda.len(), 1);
        let ann = agenda.get_contact("Ann").unwrap();
        assert_eq!(ann.to_string(), "Ann [a:1, b:2, a:1]");
    }

    #[test]
    fn test_contacts_sorted_by_name() {
        let mut agenda = Agenda::new();
        for name in ["Zed", "Mia", "Bob", "Al"] {
            agenda.add_contact(name, Vec::new());
        }
        assert_eq!(names(&agenda.contacts()), vec!["Al", "Bob", "Mia", "Zed"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut agenda = Agenda::new();
        agenda.add_contact("ann", Vec::new());
        agenda.add_contact("Ann", Vec::new());
        assert_eq!(agenda.len(), 2);
        assert_eq!(names(&agenda.contacts()), vec!["Ann", "ann"]);
    }

    #[test]
    fn test_find_pos_uses_storage_order() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Zed", Vec::new());
        agenda.add_contact("Al", Vec::new());
        assert_eq!(agenda.find_pos_by_name("Zed"), Some(0));
        assert_eq!(agenda.find_pos_by_name("Al"), Some(1));
        assert_eq!(agenda.find_pos_by_name("Nobody"), None);
        assert!(agenda.get_contact("Nobody").is_none());
    }

    #[test]
    fn test_rm_contact() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Dan", vec![phone("1:1")]);
        let removed = agenda.rm_contact("Dan").unwrap();
        assert_eq!(removed.name(), "Dan");
        assert!(agenda.is_empty());
        assert!(agenda.rm_contact("Dan").is_none());
        assert_eq!(agenda.to_string(), "");
    }

    #[test]
    fn test_readding_removed_contact_resets_favorite() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Eve", Vec::new());
        agenda.favorite_contact("Eve");
        agenda.rm_contact("Eve");
        agenda.add_contact("Eve", Vec::new());
        assert!(!agenda.get_contact("Eve").unwrap().is_favorited());
    }

    #[test]
    fn test_search_matches_name_and_phones() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Carol", vec![phone("home:111"), phone("work:222")]);
        agenda.add_contact("Bob", vec![phone("cell:222")]);

        assert_eq!(
            agenda.search("222"),
            "- Bob [cell:222]\n- Carol [home:111, work:222]"
        );
        assert_eq!(agenda.search("home:1"), "- Carol [home:111, work:222]");
        assert_eq!(agenda.search("arol"), "- Carol [home:111, work:222]");
        assert_eq!(agenda.search("999"), "");
    }

    #[test]
    fn test_search_uses_regular_mark_for_favorites() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Bob", vec![phone("1:2")]);
        agenda.favorite_contact("Bob");
        assert_eq!(agenda.search("Bob"), "- Bob [1:2]");
    }

    #[test]
    fn test_favorite_contact_is_involution() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Bob", Vec::new());
        agenda.favorite_contact("Bob");
        assert!(agenda.get_contact("Bob").unwrap().is_favorited());
        agenda.favorite_contact("Bob");
        assert!(!agenda.get_contact("Bob").unwrap().is_favorited());

        // absent names are ignored
        agenda.favorite_contact("Nobody");
        assert_eq!(agenda.len(), 1);
    }

    #[test]
    fn test_favorited_sorted_subset() {
        let mut agenda = Agenda::new();
        for name in ["Zed", "Mia", "Al"] {
            agenda.add_contact(name, Vec::new());
        }
        agenda.favorite_contact("Zed");
        agenda.favorite_contact("Al");
        assert_eq!(names(&agenda.favorited()), vec!["Al", "Zed"]);
    }

    #[test]
    fn test_agenda_display() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Bob", vec![phone("555:2222")]);
        agenda.add_contact("Alice", vec![phone("555:1111")]);
        agenda.favorite_contact("Bob");
        assert_eq!(
            agenda.to_string(),
            "- Alice [555:1111]\n@ Bob [555:2222]"
        );
    }

    #[test]
    fn test_phones_mut_through_agenda() {
        let mut agenda = Agenda::new();
        agenda.add_contact("Ann", vec![phone("a:1"), phone("b:2")]);
        agenda.get_contact_mut("Ann").unwrap().phones_mut().pop();
        assert_eq!(agenda.get_contact("Ann").unwrap().to_string(), "Ann [a:1]");
    }
}
