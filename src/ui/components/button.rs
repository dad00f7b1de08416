//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a form button. `accent` colors the primary action.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    accent: Option<Color>,
    is_enabled: bool,
) {
    let (border_style, text_style) = match (is_enabled, accent) {
        (false, _) => (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        ),
        (true, Some(color)) => (
            Style::default().fg(color),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        (true, None) => (Style::default().fg(Color::Gray), Style::default()),
    };

    let paragraph = Paragraph::new(content.to_string())
        .alignment(Alignment::Center)
        .style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
