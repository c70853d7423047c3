//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday does not match the `DD.MM.YYYY` shape.
    InvalidBirthdayFormat(String),

    /// The provided birthday matches the shape but is not a real calendar date.
    InvalidCalendarDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number '{}'. The number must consist of 10 digits.",
                phone
            ),
            Self::InvalidBirthdayFormat(value) => write!(
                f,
                "Invalid date format '{}'. Use the 'DD.MM.YYYY' format.",
                value
            ),
            Self::InvalidCalendarDate(value) => {
                write!(f, "Invalid date '{}'. Ensure it exists.", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
