//! Dialog components for TUI

mod base;
mod error_dialog;
mod route_prompt;
mod toast;

pub use error_dialog::render_error_dialog;
pub use route_prompt::render_route_prompt;
pub use toast::render_toast;
