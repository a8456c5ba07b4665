//! Form field value objects

use std::fmt;

/// The five fields of the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Message,
}

impl FieldName {
    /// All fields in tab order
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Message,
    ];

    /// Stable key used in logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    /// Placeholder label shown on the input box
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Phone => "Phone Number",
            Self::Message => "Your Message",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Represents a single form field with its value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.name.is_multiline()
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_tab_order() {
        assert_eq!(FieldName::ALL[0], FieldName::FirstName);
        assert_eq!(FieldName::ALL[4], FieldName::Message);
    }

    #[test]
    fn test_only_message_is_multiline() {
        for name in FieldName::ALL {
            assert_eq!(name.is_multiline(), name == FieldName::Message);
        }
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::new(FieldName::FirstName);
        field.push_char('V');
        field.push_char('K');
        assert_eq!(field.as_text(), "VK");
        field.pop_char();
        assert_eq!(field.as_text(), "V");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::new(FieldName::Phone);
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::new(FieldName::Email);
        field.value = "user@example.com".to_string();
        field.clear();
        assert!(field.as_text().is_empty());
    }

    #[test]
    fn test_display_uses_key() {
        assert_eq!(FieldName::LastName.to_string(), "lastName");
    }
}
