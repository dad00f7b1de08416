//! UI module for rendering the TUI

mod components;
mod forms;
pub mod home;
mod layout;
mod not_found;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Rows left for the page between navbar and footer
pub fn body_height(total: u16) -> u16 {
    total.saturating_sub(layout::NAVBAR_HEIGHT + layout::FOOTER_HEIGHT)
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (navbar_area, main_area, footer_area) = layout::create_layout(frame.area());

    layout::draw_navbar(frame, navbar_area, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, main_area, app),
        View::Form => forms::draw_form(frame, main_area, app),
        View::NotFound => not_found::draw(frame, main_area, app),
    }

    layout::draw_footer(frame, footer_area, app);

    // Overlays, topmost last
    if let Some(toast) = app.state.active_toast() {
        components::render_toast(frame, toast);
    }
    if let Some(input) = &app.state.route_input {
        components::render_route_prompt(frame, input);
    }
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
