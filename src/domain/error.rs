//! Errors raised by the contact model
//!
//! The model never prints; callers decide how to present these.

use thiserror::Error;

/// A raw value failed validation on construction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid phone number '{0}': expected exactly 10 digits")]
    Phone(String),

    #[error("Value '{0}' is not a valid date in the format DD.MM.YYYY")]
    Birthday(String),

    #[error("Contact name cannot be empty")]
    EmptyName,
}

/// Errors from mutating a contact's phone list
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Phone number '{0}' not found")]
    PhoneNotFound(String),
}
