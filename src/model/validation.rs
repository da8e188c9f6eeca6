use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::contact::{Contact, Field};

/// Minimum number of characters accepted for a first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// A violated contact form rule. The display text is what the user sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("firstName must have at least 5 characters")]
    FirstNameTooShort,
    #[error("lastName is a required field")]
    LastNameRequired,
    #[error("email must be a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// The field this violation belongs to.
    pub fn field(self) -> Field {
        match self {
            Self::FirstNameTooShort => Field::FirstName,
            Self::LastNameRequired => Field::LastName,
            Self::InvalidEmail => Field::Email,
        }
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid hardcoded regex"));

/// Validates a first name: at least [`FIRST_NAME_MIN_LEN`] characters.
pub fn validate_first_name(first_name: &str) -> Result<(), ValidationError> {
    if first_name.chars().count() >= FIRST_NAME_MIN_LEN {
        Ok(())
    } else {
        Err(ValidationError::FirstNameTooShort)
    }
}

/// Validates a last name: must be non-empty.
pub fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
    match last_name {
        "" => Err(ValidationError::LastNameRequired),
        _ => Ok(()),
    }
}

/// Validates an email address of the shape `local@domain.tld`.
///
/// An empty address fails with the same error as a malformed one.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validates a single field of `contact`. The message is never invalid.
pub fn validate_field(field: Field, contact: &Contact) -> Result<(), ValidationError> {
    let value = contact.get(field);
    match field {
        Field::FirstName => validate_first_name(value),
        Field::LastName => validate_last_name(value),
        Field::Email => validate_email(value),
        Field::Message => Ok(()),
    }
}

/// Validates every field of `contact`, returning violations in field order.
pub fn validate(contact: &Contact) -> Vec<ValidationError> {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, contact).err())
        .collect()
}
