//! Trait abstraction for the intake service to enable mocking in tests

use super::types::{ApplicationPayload, IntakeError, SubmissionReceipt};
use async_trait::async_trait;

/// Receives completed application forms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IntakeServiceTrait: Send + Sync {
    /// Submit one application and wait for the answer
    async fn submit(&self, payload: ApplicationPayload) -> Result<SubmissionReceipt, IntakeError>;
}
