//! Firm input view: email, firm name with suggestions, entered firms

use super::field_renderer::draw_field;
use crate::app::App;
use firm_advisor::state::{ErrorField, FirmInputFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_firm_input(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.firm_form;
    let focus = form.focus();
    let suggestion_height = if focus == FirmInputFocus::FirmName && !form.suggestions.is_empty() {
        form.suggestions.len() as u16 + 2
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Email
            Constraint::Length(3),                 // Firm name
            Constraint::Length(suggestion_height), // Suggestions
            Constraint::Min(3),                    // Entered firms
            Constraint::Length(1),                 // Remaining
        ])
        .split(area);

    let email_error = app.state.error_for(ErrorField::Email);
    let firm_error = app
        .state
        .error_for(ErrorField::FirmName)
        .or_else(|| app.state.error_for(ErrorField::Form));

    draw_field(
        frame,
        chunks[0],
        &form.email,
        focus == FirmInputFocus::Email,
        email_error.as_deref(),
    );
    draw_field(
        frame,
        chunks[1],
        &form.firm_name,
        focus == FirmInputFocus::FirmName,
        firm_error.as_deref(),
    );

    if suggestion_height > 0 {
        draw_suggestions(frame, chunks[2], app);
    }

    draw_entered_firms(frame, chunks[3], app, focus == FirmInputFocus::EnteredList);

    let remaining = app.form.remaining_firms();
    let remaining_text = if remaining == 0 {
        format!(
            " You've listed {} firms. You can still add more.",
            app.form.entered_firms().len()
        )
    } else {
        format!(" Up to {remaining} more firm(s) suggested")
    };
    frame.render_widget(
        Paragraph::new(remaining_text).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}

fn draw_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.firm_form;
    let items: Vec<ListItem> = form
        .suggestions
        .iter()
        .map(|name| ListItem::new(name.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" In directory ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(form.highlighted);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_entered_firms(frame: &mut Frame, area: Rect, app: &App, is_active: bool) {
    let entries = app.form.entered_firms();
    let title = format!(" Your firms ({}) ", entries.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if entries.is_empty() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No firms yet. Type a firm name above and press Enter.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let marker = if entry.is_matched {
                Span::styled("● ", Style::default().fg(Color::Green))
            } else {
                Span::styled("○ ", Style::default().fg(Color::Yellow))
            };
            ListItem::new(Line::from(vec![marker, Span::raw(entry.summary_line())]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray));

    let selected = is_active.then_some(app.state.firm_form.selected_entry);
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}
