//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap());

/// Render format used on input, output and disk.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for contact birthdays.
///
/// Parsed strictly from `DD.MM.YYYY` and stored as a typed
/// [`NaiveDate`], so date arithmetic never needs to re-parse a string.
/// Rendering goes back to the same `DD.MM.YYYY` shape.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("24.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidBirthdayFormat` if the string does not
    ///   match the `DD.MM.YYYY` shape.
    /// - `ValidationError::InvalidCalendarDate` if the shape matches but
    ///   the day/month do not form a real date (e.g. `31.02.2000`).
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_RE.is_match(value) {
            return Err(ValidationError::InvalidBirthdayFormat(value.to_string()));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidCalendarDate(value.to_string()))
    }

    /// Wrap an already-validated date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Month (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

// Serde support - serialize as a DD.MM.YYYY string for a stable on-disk shape
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
