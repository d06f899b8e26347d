//! Domain models for the contact book
//!
//! Contains the core business logic without any I/O concerns.

mod error;
mod phone;
mod birthday;
mod contact;
mod book;

pub use error::{ContactError, ValidationError};
pub use phone::{PhoneNumber, PHONE_LEN};
pub use birthday::{Birthday, DATE_FORMAT};
pub use contact::Contact;
pub use book::{AddressBook, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
