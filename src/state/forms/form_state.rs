//! Form state and focus handling

use super::field::{FieldName, FormField};

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
}

/// Focus slot of the submit control, after the four inputs
pub const SUBMIT_SLOT: usize = 4;

/// Values of the four contact inputs plus the focus cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub message: FormField,
    /// 0..=3 are inputs, 4 is the submit control
    pub active_field_index: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            first_name: FormField::new(FieldName::FirstName),
            last_name: FormField::new(FieldName::LastName),
            email: FormField::new(FieldName::Email),
            message: FormField::new(FieldName::Message),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    /// Input under focus, or `None` when the submit control is focused
    pub fn active_input(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    /// Returns true if the submit control is currently focused
    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == SUBMIT_SLOT
    }

    pub fn focus(&mut self, name: FieldName) {
        self.set_active_field(name.index());
    }

    pub fn focus_submit(&mut self) {
        self.set_active_field(SUBMIT_SLOT);
    }

    /// Empty every input and move focus back to the first one
    pub fn clear(&mut self) {
        for name in FieldName::ALL {
            self.field_mut(name).clear();
        }
        self.active_field_index = 0;
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        5 // four inputs, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_SLOT);
    }
}
