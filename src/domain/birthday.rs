//! Birthday value type
//!
//! Birthdays are entered as `DD.MM.YYYY`. The original text is kept for
//! display and the parsed date is kept for arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;

/// chrono format for `DD.MM.YYYY`
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A validated birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Parses a `DD.MM.YYYY` date
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::Birthday(raw.to_string());

        if !has_date_shape(raw) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| invalid())?;

        Ok(Self {
            raw: raw.to_string(),
            date,
        })
    }

    /// The parsed calendar date
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The text exactly as it was entered
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// This birthday's month and day in `year`
    ///
    /// Feb 29 falls back to Feb 28 when `year` is not a leap year.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, self.date.month(), 28))
    }
}

/// `DD.MM.YYYY`: two digits, dot, two digits, dot, four digits
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_valid_date() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 6, 15).unwrap());
    }

    #[test]
    fn keeps_original_text() {
        for raw in ["01.01.2000", "29.02.2024", "31.12.1969", "07.03.1901"] {
            let birthday = Birthday::new(raw).unwrap();
            assert_eq!(birthday.as_str(), raw);
            assert_eq!(birthday.to_string(), raw);
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2024").is_err());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("00.01.2024").is_err());
        assert!(Birthday::new("12.13.2024").is_err());
    }

    #[test]
    fn rejects_other_formats() {
        let rejected = [
            "2024-06-15",
            "15/06/2024",
            "1.6.2024",
            "15.06.24",
            "15.06.2024 ",
            "birthday",
            "",
        ];
        for raw in rejected {
            assert_eq!(
                Birthday::new(raw),
                Err(ValidationError::Birthday(raw.to_string())),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn leap_day_in_common_year_falls_back_to_feb_28() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2023), NaiveDate::from_ymd_opt(2023, 2, 28));
        assert_eq!(birthday.in_year(2024), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn serializes_as_entered() {
        let birthday = Birthday::new("05.11.1985").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.11.1985\"");
    }

    proptest! {
        #[test]
        fn any_valid_date_keeps_its_text(
            year in 1900i32..=2100,
            month in 1u32..=12,
            day in 1u32..=31,
        ) {
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                return Ok(());
            };
            let raw = date.format(DATE_FORMAT).to_string();
            let birthday: Birthday = raw.parse().unwrap();
            prop_assert_eq!(birthday.as_str(), raw.as_str());
            prop_assert_eq!(birthday.to_string(), raw);
            prop_assert_eq!(birthday.date(), date);
        }
    }
}
