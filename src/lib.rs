//! Contacts CLI - an interactive address book for the terminal
//!
//! Stores names, phone numbers and birthdays in memory and answers
//! line-oriented commands, including which birthdays fall in the next week.

pub mod domain;
pub mod cli;

pub use domain::{AddressBook, Birthday, Contact, PhoneNumber, UpcomingBirthday};
