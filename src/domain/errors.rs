//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating a contact before it is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent.
    MissingField(&'static str),

    /// A field exceeds its maximum length in characters.
    TooLong { field: &'static str, max: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Missing required field: {}", field),
            Self::TooLong { field, max } => {
                write!(f, "Field {} exceeds {} characters", field, max)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
        }
    }
}

impl std::error::Error for ValidationError {}
