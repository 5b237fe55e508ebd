//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number does not match `DDD-DDD-DD-DD`.
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY`.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid phone number: {} (expected DDD-DDD-DD-DD)", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday: {} (expected DD.MM.YYYY)", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
