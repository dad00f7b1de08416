//! Base dialog component

use crate::ui::widgets::wrap_text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Where a dialog sits on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    #[default]
    Center,
    /// Corner toast, below the navbar
    TopRight,
}

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint text shown at the bottom (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
    pub placement: Placement,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
            placement: Placement::Center,
        }
    }
}

/// Highlighted key name for hint lines
pub fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn dialog_area(frame_area: Rect, width: u16, height: u16, placement: Placement) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    let (x, y) = match placement {
        Placement::Center => (
            frame_area.x + frame_area.width.saturating_sub(width) / 2,
            frame_area.y + frame_area.height.saturating_sub(height) / 2,
        ),
        Placement::TopRight => (
            frame_area.x + frame_area.width.saturating_sub(width + 1),
            frame_area.y + 3.min(frame_area.height.saturating_sub(height)),
        ),
    };
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Render a dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = config.max_width.saturating_sub(padding).max(1) as usize;

    let wrapped_lines = wrap_text(config.message, max_line_width);
    let line_count = wrapped_lines.len() as u16;

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + padding + 2).min(config.max_width); // +2 for borders

    // Height: title + blank + message lines + blank (if hint) + hint + borders
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + line_count + hint_lines + 2).max(5);

    let area = dialog_area(frame.area(), width, height, config.placement);
    frame.render_widget(Clear, area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(wrapped_lines.into_iter().map(Line::from));

    if let Some(hint_spans) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint_spans));
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .padding(ratatui::widgets::Padding::horizontal(1))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_placement() {
        let area = dialog_area(Rect::new(0, 0, 80, 24), 40, 6, Placement::Center);
        assert_eq!(area, Rect::new(20, 9, 40, 6));
    }

    #[test]
    fn test_top_right_placement() {
        let area = dialog_area(Rect::new(0, 0, 80, 24), 40, 6, Placement::TopRight);
        assert_eq!(area, Rect::new(39, 3, 40, 6));
    }

    #[test]
    fn test_dialog_never_exceeds_frame() {
        let area = dialog_area(Rect::new(0, 0, 20, 4), 40, 6, Placement::Center);
        assert_eq!(area, Rect::new(0, 0, 20, 4));
    }
}
