//! Form domain layer
//!
//! Field store, error store, validator, section navigator and the form
//! session tying them together. Each application form is its own schema
//! behind the `Form` trait, selected once through [`FormKind`].

mod cohort_apply;
mod errors;
mod field;
mod forebridge;
mod form_state;
mod group;
mod navigator;
mod options;
mod quick_apply;
mod session;
mod validator;

pub use field::FormField;
pub use form_state::{FieldSlot, FormData, FormKind};
pub use navigator::Transition;
pub use session::{FormSession, SubmissionOutcome};
