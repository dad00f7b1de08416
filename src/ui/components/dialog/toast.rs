//! Success notification drawn in the top-right corner

use super::base::{render_dialog, DialogConfig, Placement};
use crate::state::Notification;
use ratatui::{style::Color, Frame};

pub fn render_toast(frame: &mut Frame, notification: &Notification) {
    render_dialog(
        frame,
        DialogConfig {
            title: &notification.title,
            title_color: Color::Green,
            border_color: Color::Green,
            message: &notification.description,
            hint: None,
            max_width: 48,
            placement: Placement::TopRight,
        },
    );
}
