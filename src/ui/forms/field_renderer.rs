//! Field rendering utilities for forms

use crate::ui::view::InputView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a labeled input. Focus wins over the error color for the border.
pub fn draw_field(frame: &mut Frame, area: Rect, input: &InputView) {
    let accent = if input.is_focused {
        Color::Cyan
    } else if input.has_error {
        Color::Red
    } else {
        Color::DarkGray
    };

    let value_style = if input.is_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if input.is_focused { CURSOR } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if input.value.is_empty() && !input.is_focused {
        Paragraph::new(Line::from(Span::styled(
            "(empty)",
            Style::default().fg(Color::DarkGray),
        )))
    } else if input.is_multiline {
        // `split` rather than `lines` so a trailing newline keeps its row
        let mut lines: Vec<Line> = input
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, value_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(input.value.as_str(), value_style),
            cursor,
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", input.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
