//! Layout components (header, status bar)

use crate::app::App;
use firm_advisor::state::{FirmInputFocus, FormStep, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const STEPS: [(FormStep, &str); 3] = [
    (FormStep::FirmInput, "Firms"),
    (FormStep::ContactDetails, "Contact"),
    (FormStep::Complete, "Done"),
];

/// Split the screen into header and content, reserving the last line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the title and step indicator
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.form.step();
    let mut spans = vec![Span::styled(
        " Network Assist ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    for (idx, (step, title)) in STEPS.iter().enumerate() {
        spans.push(Span::styled(" › ", Style::default().fg(Color::DarkGray)));
        let style = if *step == current {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{}. {title}", idx + 1), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    // A live toast replaces the hints
    if let Some(toast) = app.state.toasts.current() {
        spans.push(Span::styled(toast, Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::styled(
            get_view_hints(app),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.state.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let quit_hint = " ^C:quit ";

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: quit_hint.len() as u16,
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(app: &App) -> &'static str {
    match app.view() {
        View::FirmInput => match app.state.firm_form.focus() {
            FirmInputFocus::Email => "Tab:next  Enter:next  ^S:submit",
            FirmInputFocus::FirmName => "↑/↓:suggestion  Enter:add  Tab:next  ^S:submit",
            FirmInputFocus::EnteredList => "j/k:nav  x:remove  Tab:next  ^S:submit",
        },
        View::ContactDetails => "Tab:next  ←/→:choose  Enter/^S:save  Esc:cancel",
        View::Complete => "n:new submission  y:copy  q:quit",
    }
}
