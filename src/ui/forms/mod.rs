//! Form rendering module
//!
//! - `field_renderer`: one bordered field with its inline error
//! - `application_form`: the multi-step form page

mod application_form;
mod field_renderer;

pub use application_form::draw_form;
