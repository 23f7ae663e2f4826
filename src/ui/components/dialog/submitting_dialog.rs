//! Overlay shown while the submission is in flight

use super::base::{render_dialog, DialogConfig};
use ratatui::{style::Color, text::Span, Frame};

pub fn render_submitting_dialog(frame: &mut Frame, firm_count: usize) {
    let plural = if firm_count == 1 { "" } else { "s" };
    let message = format!("Sending {firm_count} firm{plural} to the relay...");

    render_dialog(
        frame,
        DialogConfig {
            title: "Submitting",
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            message: &message,
            hint: Some(vec![Span::raw("Please wait")]),
            max_width: 50,
        },
    );
}
