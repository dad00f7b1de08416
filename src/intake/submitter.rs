//! Runs submissions in the background and reports back to the UI loop
//!
//! Each submission is spawned on the tokio runtime and raced against a
//! cancellation token owned by its [`SubmissionHandle`]. Dropping the handle
//! (the form was left or the app quit) cancels the request, and a cancelled
//! request never produces an event.

use super::traits::IntakeServiceTrait;
use super::types::{ApplicationPayload, IntakeError, SubmissionReceipt};
use std::sync::Arc;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Answer of a finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Completed {
        submission_id: Uuid,
        receipt: SubmissionReceipt,
    },
    Failed {
        submission_id: Uuid,
        error: IntakeError,
    },
}

impl SubmissionEvent {
    pub fn submission_id(&self) -> Uuid {
        match self {
            Self::Completed { submission_id, .. } | Self::Failed { submission_id, .. } => {
                *submission_id
            }
        }
    }
}

/// Keeps one in-flight submission alive; dropping it cancels the request
#[derive(Debug)]
pub struct SubmissionHandle {
    submission_id: Uuid,
    cancel: CancellationToken,
}

impl SubmissionHandle {
    pub fn id(&self) -> Uuid {
        self.submission_id
    }
}

impl Drop for SubmissionHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

pub struct Submitter {
    service: Arc<dyn IntakeServiceTrait>,
    events_tx: UnboundedSender<SubmissionEvent>,
    events_rx: UnboundedReceiver<SubmissionEvent>,
}

impl Submitter {
    pub fn new(service: Arc<dyn IntakeServiceTrait>) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            service,
            events_tx,
            events_rx,
        }
    }

    /// Spawn the request; the answer arrives later as a [`SubmissionEvent`]
    pub fn submit(&self, payload: ApplicationPayload) -> SubmissionHandle {
        let submission_id = payload.submission_id;
        let cancel = CancellationToken::new();
        let cancel_child = cancel.clone();
        let service = Arc::clone(&self.service);
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let event = tokio::select! {
                biased;
                _ = cancel_child.cancelled() => {
                    tracing::info!("Submission {submission_id} cancelled");
                    return;
                }
                result = service.submit(payload) => match result {
                    Ok(receipt) => SubmissionEvent::Completed { submission_id, receipt },
                    Err(error) => SubmissionEvent::Failed { submission_id, error },
                },
            };
            if events_tx.send(event).is_err() {
                tracing::debug!("Submission {submission_id} finished after the UI shut down");
            }
        });

        SubmissionHandle {
            submission_id,
            cancel,
        }
    }

    /// Non-blocking poll used by the draw loop
    pub fn try_next_event(&mut self) -> Option<SubmissionEvent> {
        self.events_rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::super::simulated::SimulatedIntake;
    use super::super::traits::MockIntakeServiceTrait;
    use super::*;
    use crate::state::{FormData, FormKind, Site};
    use chrono::Utc;
    use std::time::Duration;

    async fn next_event(submitter: &mut Submitter) -> Option<SubmissionEvent> {
        submitter.events_rx.recv().await
    }

    fn payload() -> ApplicationPayload {
        ApplicationPayload {
            submission_id: Uuid::new_v4(),
            site: Site::ForeBridge,
            form: FormKind::ForeBridgeContact,
            fields: FormData::new(),
        }
    }

    #[tokio::test]
    async fn test_completed_event_carries_receipt() {
        let mut mock = MockIntakeServiceTrait::new();
        mock.expect_submit().times(1).returning(|payload| {
            Ok(SubmissionReceipt {
                submission_id: payload.submission_id,
                reference: "APP-TEST".to_string(),
                received_at: Utc::now(),
            })
        });
        let mut submitter = Submitter::new(Arc::new(mock));
        let payload = payload();

        let handle = submitter.submit(payload.clone());
        let event = next_event(&mut submitter).await.unwrap();

        assert_eq!(event.submission_id(), handle.id());
        match event {
            SubmissionEvent::Completed { receipt, .. } => assert_eq!(receipt.reference, "APP-TEST"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failed_event() {
        let mut mock = MockIntakeServiceTrait::new();
        mock.expect_submit()
            .times(1)
            .returning(|_| Err(IntakeError::Rejected("duplicate".to_string())));
        let mut submitter = Submitter::new(Arc::new(mock));

        let _handle = submitter.submit(payload());
        let event = next_event(&mut submitter).await.unwrap();
        assert!(matches!(
            event,
            SubmissionEvent::Failed { error: IntakeError::Rejected(_), .. }
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_cancels_without_event() {
        let mut submitter = Submitter::new(Arc::new(SimulatedIntake::new(Duration::from_secs(1))));

        let handle = submitter.submit(payload());
        drop(handle);
        tokio::time::sleep(Duration::from_secs(2)).await;

        assert!(submitter.try_next_event().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_try_next_event_is_empty_while_in_flight() {
        let mut submitter = Submitter::new(Arc::new(SimulatedIntake::new(Duration::from_secs(1))));
        let _handle = submitter.submit(payload());
        assert!(submitter.try_next_event().is_none());

        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert!(submitter.try_next_event().is_some());
    }
}
