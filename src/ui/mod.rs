//! UI module for rendering the TUI

mod components;
mod forms;
pub mod layout;
pub mod view;

use crate::app::App;
use components::render_error_dialog;
use layout::FormLayout;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();
    let areas = FormLayout::compute(frame.area(), view.errors.len());

    layout::draw_header(frame, areas.header, &view.heading);
    forms::draw_form(frame, &areas, &view);
    forms::draw_summary(frame, areas.summary, &view);
    layout::draw_status_bar(frame, areas.status, app);

    // Modal error dialog on top of everything
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error);
    }
}
