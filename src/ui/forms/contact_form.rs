//! Contact form rendering (inputs, submit control, validation errors)

use super::field_renderer::draw_field;
use crate::ui::components::render_button;
use crate::ui::layout::FormLayout;
use crate::ui::view::ContactFormView;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Draw the inputs, the submit button and the error list
pub fn draw_form(frame: &mut Frame, layout: &FormLayout, view: &ContactFormView) {
    for input in &view.inputs {
        draw_field(frame, layout.input(input.field), input);
    }

    render_button(frame, layout.submit, view.submit.label, view.submit.is_focused);

    draw_errors(frame, layout.errors, view);
}

/// One row per violated rule, clipped rather than wrapped
fn draw_errors(frame: &mut Frame, area: Rect, view: &ContactFormView) {
    if view.errors.is_empty() {
        return;
    }

    let lines: Vec<Line> = view
        .errors
        .iter()
        .map(|error| Line::styled(error.as_str(), Style::default().fg(Color::Red)))
        .collect();

    let errors = Paragraph::new(lines);
    frame.render_widget(errors, area);
}
