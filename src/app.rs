//! Application state and core logic

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::config::{CopyFormat, TuiConfig};
use crate::state::{AppState, FieldName, SubmitOutcome};
use crate::ui::layout::{FormLayout, Hit};
use crate::ui::view::ContactFormView;
use anyhow::{anyhow, Result};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded user configuration
    pub config: TuiConfig,
    /// Where copied summaries go
    clipboard: Box<dyn ClipboardSink>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App backed by the system clipboard
    pub fn new(config: TuiConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(config: TuiConfig, clipboard: Box<dyn ClipboardSink>) -> Self {
        Self {
            state: AppState::default(),
            config,
            clipboard,
            quit: false,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// View model for the current state
    pub fn view(&self) -> ContactFormView {
        ContactFormView::from_state(self.config.title(), &self.state.contact)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                if let Err(err) = self.copy_summary() {
                    tracing::warn!("copy failed: {err:#}");
                    self.push_error(format!("Failed to copy summary: {err}"));
                }
            }
            KeyCode::Char('r') if ctrl => {
                self.state.contact.reset();
                self.state.status_message = Some("Form cleared".to_string());
            }
            // Swallow other shortcuts instead of typing them
            KeyCode::Char(_) if ctrl || alt => {}
            KeyCode::Tab | KeyCode::Down => self.state.contact.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact.prev_field(),
            KeyCode::Enter | KeyCode::Char(' ') if self.state.contact.form.is_submit_active() => {
                self.submit();
            }
            KeyCode::Enter => match self.state.contact.form.active_input() {
                Some(FieldName::Message) => {
                    self.state.contact.input_char('\n');
                }
                _ => self.state.contact.next_field(),
            },
            KeyCode::Char(c) => {
                self.state.contact.input_char(c);
            }
            KeyCode::Backspace => {
                self.state.contact.backspace();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event: clicking an input focuses it, clicking the
    /// submit control submits.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() || !self.config.mouse_capture() {
            return Ok(());
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            let layout =
                FormLayout::compute(self.screen_area(), self.state.contact.errors.len());
            match layout.hit_test(mouse.column, mouse.row) {
                Some(Hit::Input(field)) => self.state.contact.form.focus(field),
                Some(Hit::Submit) => {
                    self.state.contact.form.focus_submit();
                    self.submit();
                }
                None => {}
            }
        }
        Ok(())
    }

    /// Validate and submit the form, reporting the outcome in the status bar
    pub fn submit(&mut self) {
        let message = match self.state.contact.on_submit() {
            SubmitOutcome::Accepted => "Submitted".to_string(),
            SubmitOutcome::Rejected { error_count: 1 } => "1 field needs attention".to_string(),
            SubmitOutcome::Rejected { error_count } => {
                format!("{error_count} fields need attention")
            }
        };
        self.state.status_message = Some(message);
    }

    /// Copy the last submitted values to the clipboard
    pub fn copy_summary(&mut self) -> Result<()> {
        let submitted = self
            .state
            .contact
            .submitted
            .as_ref()
            .ok_or_else(|| anyhow!("nothing has been submitted yet"))?;

        let text = match self.config.copy_format() {
            CopyFormat::Text => submitted.to_summary_text(),
            CopyFormat::Json => serde_json::to_string_pretty(submitted)?,
        };
        let chars = text.chars().count();
        self.clipboard.set_text(text)?;
        self.state.status_message = Some(format!("Copied {chars} chars"));
        Ok(())
    }

    fn screen_area(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        Rect::new(0, 0, width, height)
    }
}
