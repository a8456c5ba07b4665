//! Contact form state

use super::field::{FieldName, FormField};
use super::validation::{self, FieldValues, ValidationErrors};
use crate::mailer::ContactMessage;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Index of the submit button row, after the five fields
pub const SUBMIT_ROW: usize = 5;

/// The contact form's field store and inline errors
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub message: FormField,
    pub errors: ValidationErrors,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            first_name: FormField::new(FieldName::FirstName),
            last_name: FormField::new(FieldName::LastName),
            email: FormField::new(FieldName::Email),
            phone: FormField::new(FieldName::Phone),
            message: FormField::new(FieldName::Message),
            errors: ValidationErrors::new(),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Message => &mut self.message,
        }
    }

    /// Field under the cursor, `None` on the submit row
    pub fn active_field_name(&self) -> Option<FieldName> {
        FieldName::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_field_name()
            .is_some_and(|name| name.is_multiline())
    }

    /// Replace a field's value; its error is cleared without re-validating
    pub fn set_value(&mut self, name: FieldName, value: impl Into<String>) {
        self.field_mut(name).value = value.into();
        self.errors.clear(name);
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(name) = self.active_field_name() {
            self.field_mut(name).push_char(c);
            self.errors.clear(name);
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            self.field_mut(name).pop_char();
            self.errors.clear(name);
        }
    }

    pub fn values(&self) -> FieldValues<'_> {
        FieldValues {
            first_name: self.first_name.as_text(),
            last_name: self.last_name.as_text(),
            email: self.email.as_text(),
            phone: self.phone.as_text(),
            message: self.message.as_text(),
        }
    }

    /// Run the validator and store its errors
    pub fn validate(&mut self) -> bool {
        let result = validation::validate(self.values());
        let valid = result.is_valid();
        self.errors = result.errors;
        valid
    }

    /// Snapshot of the current values for the mailer
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            email: self.email.value.clone(),
            phone: self.phone.value.clone(),
            message: self.message.value.clone(),
        }
    }

    /// Empty all five values. Errors and the cursor are left alone.
    pub fn clear_values(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        6 // five fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldName::ALL.get(index).map(|name| self.field(*name))
    }
}
