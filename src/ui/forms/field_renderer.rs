//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field box takes, borders included
pub fn field_height(field: &FormField) -> u16 {
    if field.is_multiline() {
        6
    } else {
        3
    }
}

/// Draw a form field with its inline validation error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let display_value = field.display_value();
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if display_value.is_empty() {
        let placeholder = if field.is_choice() {
            if is_active {
                "◀ choose ▶"
            } else {
                "Select an option"
            }
        } else {
            field.placeholder
        };
        let placeholder = Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        if field.is_choice() {
            Paragraph::new(Line::from(placeholder))
        } else {
            Paragraph::new(Line::from(vec![cursor, placeholder]))
        }
    } else if field.is_choice() {
        let value = Span::styled(display_value, Style::default().fg(Color::White));
        if is_active {
            let arrow = Style::default().fg(Color::Cyan);
            Paragraph::new(Line::from(vec![
                Span::styled("◀ ", arrow),
                value,
                Span::styled(" ▶", arrow),
            ]))
        } else {
            Paragraph::new(Line::from(value))
        }
    } else if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::raw(display_value), cursor]))
    };

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}
