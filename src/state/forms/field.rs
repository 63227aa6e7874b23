//! Form field value objects

use std::fmt;

/// The four inputs of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    /// All fields in display order
    pub const ALL: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    /// Field key used in rule messages
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Input label; required fields carry an asterisk
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name*",
            Self::LastName => "Last Name*",
            Self::Email => "Email*",
            Self::Message => "Message",
        }
    }

    /// Caption used in the submitted-values summary
    pub fn display_caption(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Message)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Position in display order
    pub fn index(&self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::Message => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Represents a single form input with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
            is_multiline: name.is_multiline(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Value with `c` appended, leaving the field untouched
    pub fn with_char(&self, c: char) -> String {
        let mut next = self.value.clone();
        next.push(c);
        next
    }

    /// Value with the last character removed, leaving the field untouched
    pub fn without_last_char(&self) -> String {
        let mut next = self.value.clone();
        next.pop();
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_mark_required_fields() {
        for field in FieldName::ALL {
            assert_eq!(field.label().ends_with('*'), field.is_required());
        }
    }

    #[test]
    fn test_only_message_is_multiline() {
        assert!(FormField::new(FieldName::Message).is_multiline);
        assert!(!FormField::new(FieldName::FirstName).is_multiline);
        assert!(!FormField::new(FieldName::Email).is_multiline);
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(FieldName::FirstName.to_string(), "firstName");
        assert_eq!(FieldName::LastName.to_string(), "lastName");
    }

    #[test]
    fn test_index_round_trip() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_index(field.index()), Some(field));
        }
        assert_eq!(FieldName::from_index(4), None);
    }

    fn field_with(name: FieldName, value: &str) -> FormField {
        let mut field = FormField::new(name);
        field.set_text(value.to_string());
        field
    }

    #[test]
    fn test_with_char_does_not_mutate() {
        let field = field_with(FieldName::LastName, "Kom");
        assert_eq!(field.with_char('i'), "Komi");
        assert_eq!(field.as_text(), "Kom");
    }

    #[test]
    fn test_without_last_char_on_empty() {
        let field = FormField::new(FieldName::Email);
        assert_eq!(field.without_last_char(), "");
    }

    #[test]
    fn test_without_last_char_handles_multibyte() {
        let field = field_with(FieldName::Message, "<3 ♥");
        assert_eq!(field.without_last_char(), "<3 ");
    }
}
