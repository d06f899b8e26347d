//! Contact record
//!
//! A contact has an immutable name, an ordered list of phone numbers
//! (duplicates allowed) and at most one birthday.

use serde::Serialize;
use std::fmt;

use super::birthday::Birthday;
use super::error::{ContactError, ValidationError};
use super::phone::PhoneNumber;

/// A single address book entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contact {
    name: String,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Contact {
    /// Creates a contact with no phones and no birthday
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates and appends a phone number
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Removes every phone equal to `raw`, returning how many were removed
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    /// Replaces the first phone equal to `old` with `new`
    ///
    /// `new` is validated before anything changes. Fails with
    /// [`ContactError::PhoneNotFound`] when no phone matches `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ContactError> {
        let replacement = PhoneNumber::new(new)?;
        let slot = self
            .phones
            .iter_mut()
            .find(|p| p.as_str() == old)
            .ok_or_else(|| ContactError::PhoneNotFound(old.to_string()))?;
        *slot = replacement;
        Ok(())
    }

    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Sets the birthday, replacing any previous one
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(phone.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_with(phones: &[&str]) -> Contact {
        let mut contact = Contact::new("Alice").unwrap();
        for phone in phones {
            contact.add_phone(phone).unwrap();
        }
        contact
    }

    #[test]
    fn new_contact_is_empty() {
        let contact = Contact::new("Alice").unwrap();
        assert_eq!(contact.name(), "Alice");
        assert!(contact.phones().is_empty());
        assert!(contact.birthday().is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(Contact::new("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn add_phone_keeps_order_and_duplicates() {
        let contact = contact_with(&["1111111111", "2222222222", "1111111111"]);
        let phones: Vec<_> = contact.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["1111111111", "2222222222", "1111111111"]);
    }

    #[test]
    fn add_phone_rejects_invalid_number() {
        let mut contact = contact_with(&[]);
        assert!(contact.add_phone("12345").is_err());
        assert!(contact.phones().is_empty());
    }

    #[test]
    fn remove_phone_removes_all_matches() {
        let mut contact = contact_with(&["1111111111", "2222222222", "1111111111"]);
        assert_eq!(contact.remove_phone("1111111111"), 2);
        assert_eq!(contact.phones().len(), 1);
        assert_eq!(contact.remove_phone("9999999999"), 0);
        assert_eq!(contact.phones().len(), 1);
    }

    #[test]
    fn edit_phone_replaces_first_match_only() {
        let mut contact = contact_with(&["1111111111", "1111111111"]);
        contact.edit_phone("1111111111", "3333333333").unwrap();
        let phones: Vec<_> = contact.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, ["3333333333", "1111111111"]);
    }

    #[test]
    fn edit_phone_reports_missing_phone() {
        let mut contact = contact_with(&["1111111111"]);
        assert_eq!(
            contact.edit_phone("2222222222", "3333333333"),
            Err(ContactError::PhoneNotFound("2222222222".to_string()))
        );
        assert_eq!(contact.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn edit_phone_validates_before_mutating() {
        let mut contact = contact_with(&["1111111111"]);
        let err = contact.edit_phone("1111111111", "abc").unwrap_err();
        assert!(matches!(err, ContactError::Validation(ValidationError::Phone(_))));
        assert_eq!(contact.phones()[0].as_str(), "1111111111");
    }

    #[test]
    fn find_phone() {
        let contact = contact_with(&["1111111111"]);
        assert!(contact.find_phone("1111111111").is_some());
        assert!(contact.find_phone("2222222222").is_none());
    }

    #[test]
    fn set_birthday_overwrites() {
        let mut contact = contact_with(&[]);
        contact.set_birthday(Birthday::new("01.01.1990").unwrap());
        contact.set_birthday(Birthday::new("02.02.1992").unwrap());
        assert_eq!(contact.birthday().unwrap().as_str(), "02.02.1992");
    }

    #[test]
    fn display_joins_phones() {
        let contact = contact_with(&["1234567890", "1234567899"]);
        assert_eq!(
            contact.to_string(),
            "Contact name: Alice, phones: 1234567890; 1234567899"
        );
        assert_eq!(contact_with(&[]).to_string(), "Contact name: Alice, phones: ");
    }

    #[test]
    fn serializes_to_json() {
        let mut contact = contact_with(&["1234567890"]);
        contact.set_birthday(Birthday::new("15.06.1990").unwrap());
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            serde_json::json!({
                "name": "Alice",
                "phones": ["1234567890"],
                "birthday": "15.06.1990",
            })
        );
    }
}
