//! Errors surfaced at the command boundary
//!
//! Every variant renders as the fixed message shown to the user. None of
//! them ends the session.

use thiserror::Error;

use crate::domain::{ContactError, ValidationError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Bad phone/date input, or a contact in the wrong state for the command
    #[error("{0}")]
    Validation(String),

    #[error("Contact '{0}' not found.")]
    NotFound(String),

    #[error("Phone number '{0}' not found.")]
    PhoneNotFound(String),

    #[error("Invalid arguments. Usage: {usage}")]
    Arity { usage: String },

    #[error("Invalid command.")]
    UnknownCommand,
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Validation(err.to_string())
    }
}

impl From<ContactError> for CommandError {
    fn from(err: ContactError) -> Self {
        match err {
            ContactError::Validation(inner) => inner.into(),
            ContactError::PhoneNotFound(phone) => CommandError::PhoneNotFound(phone),
        }
    }
}
