//! Phone number value type
//!
//! A phone number is exactly ten ASCII digits. Separators, spaces and
//! country prefixes are rejected rather than normalized.

use serde::Serialize;
use std::fmt;

use super::error::ValidationError;

/// Required number of digits
pub const PHONE_LEN: usize = 10;

/// A validated 10-digit phone number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validates `raw` and wraps it
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        if raw.len() == PHONE_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::Phone(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
