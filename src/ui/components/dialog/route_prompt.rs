//! "Go to" prompt for typing a route

use super::base::{key_span, render_dialog, DialogConfig};
use ratatui::{style::Color, text::Span, Frame};

pub fn render_route_prompt(frame: &mut Frame, input: &str) {
    let message = format!("> {input}▌");
    let hint = vec![
        key_span("Enter"),
        Span::raw(" open  "),
        key_span("Esc"),
        Span::raw(" cancel"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Go to",
            title_color: Color::Cyan,
            border_color: Color::Cyan,
            message: &message,
            hint: Some(hint),
            max_width: 50,
            ..Default::default()
        },
    );
}
