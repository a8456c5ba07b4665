//! Form domain layer
//!
//! Field store, validation rules and the cursor model for the contact form.

mod field;
mod form_state;
pub mod validation;

pub use field::{FieldName, FormField};
pub use form_state::{ContactForm, Form, SUBMIT_ROW};
