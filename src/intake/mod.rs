//! Application intake: the service seam and the background submitter

mod simulated;
mod submitter;
mod traits;
mod types;

pub use simulated::{SimulatedIntake, DEFAULT_DELAY};
pub use submitter::{SubmissionEvent, SubmissionHandle, Submitter};
pub use traits::IntakeServiceTrait;
pub use types::ApplicationPayload;

#[cfg(test)]
pub use traits::MockIntakeServiceTrait;
#[cfg(test)]
pub use types::IntakeError;
