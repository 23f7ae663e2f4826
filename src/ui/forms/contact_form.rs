//! Contact details view for a firm found in the directory

use super::field_renderer::{draw_choice_field, draw_field};
use crate::app::App;
use firm_advisor::state::{ErrorField, Form};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let firm_name = app.form.current_firm_name().unwrap_or_default();
    let block = Block::default()
        .title(format!(" Contact at {firm_name} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(3), // Name
            Constraint::Length(3), // Designation
            Constraint::Length(3), // Relationship strength
            Constraint::Length(3), // Contact frequency
            Constraint::Length(1), // Error
            Constraint::Min(0),
        ])
        .split(inner);

    let intro = Paragraph::new(Line::from(vec![
        Span::styled(
            firm_name,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" is in our directory. Who do you know there?"),
    ]));
    frame.render_widget(intro, chunks[0]);

    let form = &app.state.contact_form;
    let active = form.active_field();

    draw_field(frame, chunks[1], &form.name, active == 0, None);
    draw_field(frame, chunks[2], &form.designation, active == 1, None);
    draw_choice_field(
        frame,
        chunks[3],
        "Relationship strength",
        form.relationship_strength.map(|s| s.label()),
        active == 2,
    );
    draw_choice_field(
        frame,
        chunks[4],
        "Contact frequency",
        form.contact_frequency.map(|f| f.label()),
        active == 3,
    );

    if let Some(error) = app.state.error_for(ErrorField::Contact) {
        frame.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(Color::Red))),
            chunks[5],
        );
    }
}
