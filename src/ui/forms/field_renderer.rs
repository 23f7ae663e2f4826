//! Field rendering utilities for forms

use firm_advisor::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_block(label: &str, is_active: bool, error: Option<&str>) -> Block<'static> {
    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));

    if let Some(error) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    block
}

/// Draw a single-line text field, with an optional error under it
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let content = if field.value.is_empty() && !is_active {
        Line::from(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else {
        let cursor = if is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(field.value.as_str(), value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    frame.render_widget(
        Paragraph::new(content).block(field_block(&field.label, is_active, error)),
        area,
    );
}

/// Draw a choice field cycled with the arrow keys
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Option<&str>,
    is_active: bool,
) {
    let content = match value {
        Some(value) => {
            let arrow = Style::default().fg(if is_active {
                Color::Cyan
            } else {
                Color::DarkGray
            });
            Line::from(vec![
                Span::styled("◀ ", arrow),
                Span::styled(
                    value.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", arrow),
            ])
        }
        None => Line::from(Span::styled(
            "(choose with ←/→)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(
        Paragraph::new(content).block(field_block(label, is_active, None)),
        area,
    );
}
