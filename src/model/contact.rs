/// One of the four inputs on the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in the order they are shown.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Position of the field within [`Field::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Message => 3,
        }
    }

    /// Returns the field at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Whether the field carries a validation rule.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }
}

/// The values a user has entered into the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl Contact {
    /// Returns the value of `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    /// Builds a contact from values listed in [`Field::ALL`] order.
    ///
    /// Missing trailing values are treated as empty.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a str>) -> Self {
        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default().to_string();
        Self {
            first_name: next(),
            last_name: next(),
            email: next(),
            message: next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_from_index() {
        for field in Field::ALL {
            assert_eq!(Field::from_index(field.index()), Some(field));
        }
    }

    #[test]
    fn from_index_out_of_bounds() {
        assert_eq!(Field::from_index(4), None);
    }

    #[test]
    fn labels_match_expected() {
        let labels: Vec<&str> = Field::ALL.iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["First Name", "Last Name", "Email", "Message"]);
    }

    #[test]
    fn only_message_is_optional() {
        assert!(Field::FirstName.is_required());
        assert!(Field::LastName.is_required());
        assert!(Field::Email.is_required());
        assert!(!Field::Message.is_required());
    }

    #[test]
    fn from_values_assigns_in_field_order() {
        let contact = Contact::from_values(["michael", "newell", "a@b.com", "hi"]);
        assert_eq!(contact.get(Field::FirstName), "michael");
        assert_eq!(contact.get(Field::LastName), "newell");
        assert_eq!(contact.get(Field::Email), "a@b.com");
        assert_eq!(contact.get(Field::Message), "hi");
    }

    #[test]
    fn from_values_pads_missing_with_empty() {
        let contact = Contact::from_values(["michael"]);
        assert_eq!(contact.first_name, "michael");
        assert_eq!(contact.last_name, "");
        assert_eq!(contact.message, "");
    }
}
