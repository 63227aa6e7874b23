//! Form domain layer
//!
//! Field definitions, validation rules and the contact form component.

mod contact_form;
mod field;
mod form_state;
mod validation;

pub use contact_form::{ContactForm, SubmitOutcome};
pub use field::{FieldName, FormField};
