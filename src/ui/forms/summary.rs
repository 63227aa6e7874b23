//! Submitted-values summary panel

use crate::ui::view::ContactFormView;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the summary of the last accepted submission, or a hint if none
pub fn draw_summary(frame: &mut Frame, area: Rect, view: &ContactFormView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(summary) = &view.summary else {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Nothing submitted yet",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            summary.heading,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for item in &summary.lines {
        if item.field.is_multiline() {
            lines.extend(item.text.split('\n').map(Line::raw));
        } else {
            lines.push(Line::raw(item.text.as_str()));
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block.border_style(Style::default().fg(Color::Green)));
    frame.render_widget(paragraph, area);
}
