//! Screen layout (header, form column, summary panel, status bar)

use super::components::BUTTON_HEIGHT;
use crate::app::App;
use crate::state::FieldName;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the header box (with borders)
pub const HEADER_HEIGHT: u16 = 3;
/// Height of a single-line input (with borders)
pub const FIELD_HEIGHT: u16 = 3;
/// Height of the multi-line message input (with borders)
pub const MESSAGE_HEIGHT: u16 = 6;
/// Smallest the message input shrinks to on short terminals
pub const MIN_MESSAGE_HEIGHT: u16 = 3;
/// Width of the summary panel on the right
pub const SUMMARY_WIDTH: u16 = 40;

/// What a mouse click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Input(FieldName),
    Submit,
}

/// Areas of every part of the screen
///
/// ```text
/// +-----------------------------------------------+
/// | Contact Form                                  |
/// +------------------------------+----------------+
/// | First Name*                  | You Submitted: |
/// | Last Name*                   |                |
/// | Email*                       |                |
/// | Message                      |                |
/// | [ Submit ]                   |                |
/// +------------------------------+----------------+
/// Error: ...                          (one row each)
/// status bar
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormLayout {
    pub header: Rect,
    pub inputs: [Rect; 4],
    pub submit: Rect,
    pub errors: Rect,
    pub summary: Rect,
    pub status: Rect,
}

impl FormLayout {
    /// Split the screen; every current error gets its own full-width row.
    pub fn compute(area: Rect, error_count: usize) -> Self {
        let error_rows = u16::try_from(error_count).unwrap_or(u16::MAX);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Header
                Constraint::Min(0),                // Body
                Constraint::Length(error_rows),    // Errors
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),               // Form
                Constraint::Length(SUMMARY_WIDTH), // Summary panel
            ])
            .split(rows[1]);

        // The message box gives up rows first when the body is short
        let fixed = FIELD_HEIGHT * 3 + BUTTON_HEIGHT;
        let message_height = columns[0]
            .height
            .saturating_sub(fixed)
            .clamp(MIN_MESSAGE_HEIGHT, MESSAGE_HEIGHT);

        let form = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),   // First name
                Constraint::Length(FIELD_HEIGHT),   // Last name
                Constraint::Length(FIELD_HEIGHT),   // Email
                Constraint::Length(message_height), // Message
                Constraint::Length(BUTTON_HEIGHT),  // Submit
                Constraint::Min(0),
            ])
            .split(columns[0]);

        // Keep the button compact instead of spanning the form width
        let submit = Rect {
            width: form[4].width.min(12),
            ..form[4]
        };

        Self {
            header: rows[0],
            inputs: [form[0], form[1], form[2], form[3]],
            submit,
            errors: rows[2],
            summary: columns[1],
            status: rows[3],
        }
    }

    pub fn input(&self, field: FieldName) -> Rect {
        self.inputs[field.index()]
    }

    /// Find the control under a screen position
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if self.submit.contains(pos) {
            return Some(Hit::Submit);
        }
        FieldName::ALL
            .into_iter()
            .find(|field| self.input(*field).contains(pos))
            .map(Hit::Input)
    }
}

/// Draw the header box with the form title
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    if app.config.show_help() {
        spans.push(Span::styled(
            status_hints(),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        if app.config.show_help() {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the form
fn status_hints() -> String {
    format!(
        "Tab:next  {}:submit  {}:copy  {}:reset  Esc:quit",
        crate::platform::SUBMIT_SHORTCUT,
        crate::platform::COPY_SHORTCUT,
        crate::platform::RESET_SHORTCUT,
    )
}
