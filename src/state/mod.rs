//! Application state module

mod app_state;
mod forms;
mod site;

pub use app_state::*;
pub use forms::*;
pub use site::*;
