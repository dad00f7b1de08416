//! Request, response and error types of the intake service

use crate::state::{FormData, FormKind, Site};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Everything the intake service receives for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationPayload {
    /// Unique per submit attempt, so a retry is distinguishable from a double submit
    pub submission_id: Uuid,
    pub site: Site,
    pub form: FormKind,
    pub fields: FormData,
}

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    pub reference: String,
    pub received_at: DateTime<Utc>,
}

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("the intake service is unavailable: {0}")]
    Unavailable(String),
    #[error("the application was rejected: {0}")]
    Rejected(String),
}

impl IntakeError {
    /// Text for the inline banner under the form
    pub fn user_message(&self) -> String {
        match self {
            Self::Unavailable(_) => {
                "We couldn't reach the application service. Your answers are saved.".to_string()
            }
            Self::Rejected(reason) => format!("Your application was not accepted: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_serializes_camel_case() {
        let mut fields = FormData::new();
        fields.insert_value("fullName", "Ada");
        let payload = ApplicationPayload {
            submission_id: Uuid::nil(),
            site: Site::ThirtyUnderThirty,
            form: FormKind::QuickApply,
            fields,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "submissionId": "00000000-0000-0000-0000-000000000000",
                "site": "thirty-under-thirty",
                "form": "quick-apply",
                "fields": { "fullName": "Ada" }
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = IntakeError::Unavailable("timeout".to_string());
        assert_eq!(err.to_string(), "the intake service is unavailable: timeout");
        assert!(err.user_message().contains("saved"));
    }
}
