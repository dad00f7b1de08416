//! Stand-in intake service that answers after a fixed delay

use super::traits::IntakeServiceTrait;
use super::types::{ApplicationPayload, IntakeError, SubmissionReceipt};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Mutex;
use std::time::Duration;
use uuid::Uuid;

/// Default simulated round-trip time
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Accepts every application after `delay`, or fails every one when
/// `failure` is set. A submission id is only ever accepted once.
#[derive(Debug)]
pub struct SimulatedIntake {
    delay: Duration,
    failure: Option<String>,
    accepted: Mutex<HashSet<Uuid>>,
}

impl SimulatedIntake {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            ..Default::default()
        }
    }

    /// Make every submission fail as if the service were down
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }
}

impl Default for SimulatedIntake {
    fn default() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            failure: None,
            accepted: Mutex::default(),
        }
    }
}

#[async_trait]
impl IntakeServiceTrait for SimulatedIntake {
    async fn submit(&self, payload: ApplicationPayload) -> Result<SubmissionReceipt, IntakeError> {
        tracing::debug!(
            "Simulating submission {} ({} fields)",
            payload.submission_id,
            payload.fields.len()
        );
        tokio::time::sleep(self.delay).await;

        if let Some(reason) = &self.failure {
            return Err(IntakeError::Unavailable(reason.clone()));
        }

        let first_time = self
            .accepted
            .lock()
            .map_err(|_| IntakeError::Unavailable("intake state poisoned".to_string()))?
            .insert(payload.submission_id);
        if !first_time {
            return Err(IntakeError::Rejected(format!(
                "submission {} was already received",
                payload.submission_id
            )));
        }

        let reference = payload.submission_id.simple().to_string()[..8].to_uppercase();
        Ok(SubmissionReceipt {
            submission_id: payload.submission_id,
            reference: format!("APP-{reference}"),
            received_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormData, FormKind, Site};
    use tokio_test::{assert_err, assert_ok};

    fn payload() -> ApplicationPayload {
        ApplicationPayload {
            submission_id: Uuid::new_v4(),
            site: Site::ThirtyUnderThirty,
            form: FormKind::QuickApply,
            fields: FormData::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_accepts_after_delay() {
        let intake = SimulatedIntake::new(DEFAULT_DELAY);
        let payload = payload();
        let started = tokio::time::Instant::now();

        let receipt = assert_ok!(intake.submit(payload.clone()).await);

        assert!(started.elapsed() >= DEFAULT_DELAY);
        assert_eq!(receipt.submission_id, payload.submission_id);
        assert!(receipt.reference.starts_with("APP-"));
        assert_eq!(receipt.reference.len(), 12);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_service() {
        let intake = SimulatedIntake::new(Duration::from_millis(10)).failing("maintenance");
        let err = assert_err!(intake.submit(payload()).await);
        assert_eq!(err, IntakeError::Unavailable("maintenance".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_submission_is_rejected() {
        let intake = SimulatedIntake::new(Duration::from_millis(10));
        let payload = payload();

        assert_ok!(intake.submit(payload.clone()).await);
        let err = assert_err!(intake.submit(payload).await);
        assert!(matches!(err, IntakeError::Rejected(_)));
    }
}
