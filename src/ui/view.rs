//! View model derived from the contact form state.
//!
//! Drawing code renders this model, and tests query it the way a DOM testing
//! library queries markup: by label, role, text and test id.

#[cfg(test)]
mod queries;

use crate::state::{ContactForm, FieldName, FormField};

#[cfg(test)]
pub use queries::{Element, Role, ERROR_TEST_ID};

/// Caption of the submit control
pub const SUBMIT_LABEL: &str = "Submit";

/// Heading above the submitted-values summary
pub const SUMMARY_HEADING: &str = "You Submitted:";

/// A labeled text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub field: FieldName,
    pub label: &'static str,
    pub value: String,
    pub is_focused: bool,
    pub is_multiline: bool,
    pub has_error: bool,
}

/// One `Caption: value` line of the submitted-values summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub field: FieldName,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub is_focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub heading: &'static str,
    pub lines: Vec<SummaryLine>,
}

/// Everything the contact form screen shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormView {
    pub heading: String,
    pub inputs: Vec<InputView>,
    pub submit: ButtonView,
    /// `Error: <rule message>` per violated rule, in field order
    pub errors: Vec<String>,
    pub summary: Option<SummaryView>,
}

impl ContactFormView {
    pub fn from_state(title: &str, contact: &ContactForm) -> Self {
        let inputs = FieldName::ALL
            .into_iter()
            .map(|field| input_view(contact, contact.form.field(field)))
            .collect();

        let errors = contact
            .errors
            .iter()
            .map(|err| format!("Error: {err}"))
            .collect();

        let summary = contact.submitted.as_ref().map(|submitted| SummaryView {
            heading: SUMMARY_HEADING,
            lines: submitted
                .displayed_fields()
                .map(|field| SummaryLine {
                    field,
                    text: format!("{}: {}", field.display_caption(), submitted.value(field)),
                })
                .collect(),
        });

        Self {
            heading: title.to_string(),
            inputs,
            submit: ButtonView {
                label: SUBMIT_LABEL,
                is_focused: contact.form.is_submit_active(),
            },
            errors,
            summary,
        }
    }
}

fn input_view(contact: &ContactForm, field: &FormField) -> InputView {
    InputView {
        field: field.name,
        label: field.label(),
        value: field.as_text().to_string(),
        is_focused: contact.form.active_input() == Some(field.name),
        is_multiline: field.is_multiline,
        has_error: contact.errors.get(field.name).is_some(),
    }
}
