//! The contact form component: input values, live errors and the last
//! accepted submission.

use super::field::FieldName;
use super::form_state::{Form, FormState};
use super::validation::ValidationErrors;
use serde::Serialize;

/// Snapshot of the inputs taken when a submit passes every rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl SubmittedValues {
    fn from_form(form: &FormState) -> Self {
        Self {
            first_name: form.value(FieldName::FirstName).to_string(),
            last_name: form.value(FieldName::LastName).to_string(),
            email: form.value(FieldName::Email).to_string(),
            message: form.value(FieldName::Message).to_string(),
        }
    }

    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    /// Fields shown in the summary. The message is listed only when it is
    /// non-empty; whitespace counts as content.
    pub fn displayed_fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        FieldName::ALL
            .into_iter()
            .filter(|field| field.is_required() || !self.value(*field).is_empty())
    }

    /// Plain-text rendering of the summary, one `Caption: value` per line
    pub fn to_summary_text(&self) -> String {
        self.displayed_fields()
            .map(|field| format!("{}: {}", field.display_caption(), self.value(field)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { error_count: usize },
}

/// Contact form component state
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub form: FormState,
    pub errors: ValidationErrors,
    pub submitted: Option<SubmittedValues>,
}

impl ContactForm {
    /// Store a new value for `field` and re-derive that field's error.
    pub fn on_field_change(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        let valid = self.errors.revalidate(field, &value);
        tracing::debug!(field = field.key(), valid, "field changed");
        self.form.field_mut(field).set_text(value);
    }

    /// Validate every field; on success replace the submitted snapshot.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.errors = ValidationErrors::from_form(&self.form);
        if self.errors.is_empty() {
            self.submitted = Some(SubmittedValues::from_form(&self.form));
            tracing::info!("contact form submitted");
            SubmitOutcome::Accepted
        } else {
            let error_count = self.errors.len();
            tracing::info!(error_count, "contact form rejected");
            SubmitOutcome::Rejected { error_count }
        }
    }

    /// Append a character to the focused input.
    /// Returns false when no input is focused.
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(field) = self.form.active_input() else {
            return false;
        };
        let next = self.form.field(field).with_char(c);
        self.on_field_change(field, next);
        true
    }

    /// Delete the last character of the focused input.
    /// Returns false when no input is focused.
    pub fn backspace(&mut self) -> bool {
        let Some(field) = self.form.active_input() else {
            return false;
        };
        let next = self.form.field(field).without_last_char();
        self.on_field_change(field, next);
        true
    }

    /// Empty the inputs and drop their errors. The last submission stays.
    pub fn reset(&mut self) {
        self.form.clear();
        self.errors.clear();
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }
}
