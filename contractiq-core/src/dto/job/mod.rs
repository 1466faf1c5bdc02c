//! Job submission DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::JobId;

/// Body returned when work was queued instead of executed inline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSubmitted {
    pub job_id: JobId,
}

/// Acknowledgement of the UI flow webhook (`202 Accepted`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlowAccepted {
    pub status: String,
    pub job_id: JobId,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of any submit endpoint
///
/// In asynchronous mode the backend answers `{ "job_id": ... }`; in
/// synchronous mode it answers with the workflow result directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmitResponse {
    Queued(JobSubmitted),
    Immediate(serde_json::Value),
}

impl SubmitResponse {
    /// Job id to poll, if the work was queued
    pub fn job_id(&self) -> Option<&JobId> {
        match self {
            SubmitResponse::Queued(submitted) => Some(&submitted.job_id),
            SubmitResponse::Immediate(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_id_body_is_queued() {
        let response: SubmitResponse = serde_json::from_value(json!({"job_id": "abc-123"})).unwrap();
        assert_eq!(response.job_id().map(JobId::as_str), Some("abc-123"));
    }

    #[test]
    fn test_result_body_is_immediate() {
        let body = json!({
            "vendors": [{"name": "Globex"}],
            "best_vendor": "Globex"
        });
        let response: SubmitResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(response, SubmitResponse::Immediate(body));
    }

    #[test]
    fn test_result_carrying_job_id_among_other_fields_is_immediate() {
        let body = json!({"job_id": "abc", "answers": ["yes"]});
        let response: SubmitResponse = serde_json::from_value(body.clone()).unwrap();
        assert!(response.job_id().is_none());
    }

    #[test]
    fn test_ui_flow_acknowledgement() {
        let ack: UiFlowAccepted = serde_json::from_value(json!({
            "status": "accepted",
            "job_id": "ui-7",
            "message": "UI flow enqueued"
        }))
        .unwrap();

        assert_eq!(ack.job_id.as_str(), "ui-7");
        assert_eq!(ack.status, "accepted");
    }
}
