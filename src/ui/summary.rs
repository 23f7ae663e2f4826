//! Completion view

use crate::app::App;
use firm_advisor::state::AdvisorForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Plain-text summary of the submitted firms, used for the clipboard
pub fn summary_text(form: &AdvisorForm) -> String {
    let mut lines = vec![format!("Network assist submission from {}", form.user_email())];
    lines.extend(
        form.entered_firms()
            .iter()
            .enumerate()
            .map(|(idx, entry)| format!("{}. {}", idx + 1, entry.summary_line())),
    );
    lines.join("\n")
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Thank you
            Constraint::Min(0),    // Firms
        ])
        .split(area);

    let matched = app
        .form
        .entered_firms()
        .iter()
        .filter(|entry| entry.is_matched)
        .count();

    let thanks = Paragraph::new(vec![
        Line::from(Span::styled(
            "Thank you!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(format!(
            "We've recorded {} firm(s), {matched} with contact details, for {}.",
            app.form.entered_firms().len(),
            app.form.user_email()
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(thanks, chunks[0]);

    let items: Vec<ListItem> = app
        .form
        .entered_firms()
        .iter()
        .enumerate()
        .map(|(idx, entry)| ListItem::new(format!("{}. {}", idx + 1, entry.summary_line())))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Submitted firms ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, chunks[1]);
}
