use chrono::{DateTime, Utc};

use super::contact::Contact;
use super::validation::{ValidationError, validate};

/// A contact that passed validation, captured at the moment it was submitted.
///
/// The only constructor validates first, so a `Submission` never holds
/// invalid values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    contact: Contact,
    submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Accepts `contact` if it is valid, timestamped now.
    pub fn accept(contact: Contact) -> Result<Self, Vec<ValidationError>> {
        Self::accept_at(contact, Utc::now())
    }

    /// Accepts `contact` if it is valid, with an explicit timestamp.
    pub fn accept_at(
        contact: Contact,
        submitted_at: DateTime<Utc>,
    ) -> Result<Self, Vec<ValidationError>> {
        let errors = validate(&contact);
        if errors.is_empty() {
            Ok(Self {
                contact,
                submitted_at,
            })
        } else {
            Err(errors)
        }
    }

    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    /// The submitted message, or `None` if it was left empty.
    pub fn message(&self) -> Option<&str> {
        let message = self.contact.message.as_str();
        (!message.is_empty()).then_some(message)
    }
}
