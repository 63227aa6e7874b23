//! Application state definitions

use super::forms::ContactForm;
use std::collections::VecDeque;

/// Everything the UI renders from
#[derive(Debug, Default)]
pub struct AppState {
    /// The contact form component
    pub contact: ContactForm,
    /// System errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the shown error; the next queued one (if any) takes its place
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
