//! Address book
//!
//! Contacts keyed by name, iterated in insertion order. The upcoming
//! birthday query lives here because it needs the whole book.

use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use super::birthday::DATE_FORMAT;
use super::contact::Contact;

/// How many days ahead of today a birthday is still "upcoming"
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// A contact to congratulate and the (weekend-adjusted) day to do it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    pub name: String,
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// In-memory contact store, at most one contact per name
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: IndexMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `contact`, replacing any contact with the same name
    ///
    /// A replaced contact keeps its original position.
    pub fn add_record(&mut self, contact: Contact) {
        self.records.insert(contact.name().to_string(), contact);
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.records.get_mut(name)
    }

    /// Removes a contact, keeping the order of the others
    pub fn delete(&mut self, name: &str) -> Option<Contact> {
        self.records.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates contacts in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.records.values()
    }

    /// Contacts whose birthday falls within the next week
    ///
    /// A birthday counts when it is 0 to 7 days after `today`. Birthdays on
    /// a Saturday or Sunday are congratulated on the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|contact| {
                let birthday = contact.birthday()?;

                let mut next = birthday.in_year(today.year())?;
                if next < today {
                    next = birthday.in_year(today.year() + 1)?;
                }

                let mut days = (next - today).num_days();
                if !(0..=UPCOMING_WINDOW_DAYS).contains(&days) {
                    return None;
                }

                let weekday = i64::from(next.weekday().num_days_from_monday());
                if weekday >= 5 {
                    days += 7 - weekday;
                }

                Some(UpcomingBirthday {
                    name: contact.name().to_string(),
                    congratulation_date: today + Duration::days(days),
                })
            })
            .collect()
    }
}
