//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod summary;

use crate::app::App;
use firm_advisor::state::View;
use ratatui::Frame;

pub use summary::summary_text;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match app.view() {
        View::FirmInput => forms::draw_firm_input(frame, main_area, app),
        View::ContactDetails => forms::draw_contact_form(frame, main_area, app),
        View::Complete => summary::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    if app.pending_submit || app.form.is_submitting() {
        components::render_submitting_dialog(frame, app.form.entered_firms().len());
    }
}
