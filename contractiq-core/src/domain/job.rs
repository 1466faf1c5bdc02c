//! Job domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Opaque identifier the backend assigns to a job at submission time
///
/// Always non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

/// Returned when a job id is empty or whitespace
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("job id must not be empty")]
pub struct InvalidJobId;

impl JobId {
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidJobId> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(InvalidJobId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JobId {
    type Err = InvalidJobId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for JobId {
    type Error = InvalidJobId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> Self {
        id.0
    }
}

/// Job execution status
///
/// The enumeration is closed: the backend may only move a job forward through
/// `Pending -> Processing -> Success | Failure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Processing,
    Success,
    Failure,
}

impl JobStatus {
    /// Wire representation used by the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Processing => "PROCESSING",
            JobStatus::Success => "SUCCESS",
            JobStatus::Failure => "FAILURE",
        }
    }

    /// `Success` and `Failure` are terminal; no transition follows them
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Success | JobStatus::Failure)
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string outside the known enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized job status '{0}'")]
pub struct UnknownJobStatus(pub String);

impl FromStr for JobStatus {
    type Err = UnknownJobStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(JobStatus::Pending),
            "PROCESSING" => Ok(JobStatus::Processing),
            "SUCCESS" => Ok(JobStatus::Success),
            "FAILURE" => Ok(JobStatus::Failure),
            other => Err(UnknownJobStatus(other.to_string())),
        }
    }
}

/// A single observation of a job, as returned by `GET /jobs/{id}`
///
/// The status is kept as the raw wire string so that values outside the
/// enumeration survive deserialization and can be reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobRecord {
    /// Record for a job that has not reached a terminal status yet
    pub fn in_flight(status: JobStatus) -> Self {
        Self {
            status: status.as_str().to_string(),
            job_type: None,
            payload: None,
            result: None,
            error: None,
        }
    }

    /// Record for a job that completed with `result`
    pub fn succeeded(result: serde_json::Value) -> Self {
        Self {
            result: Some(result),
            ..Self::in_flight(JobStatus::Success)
        }
    }

    /// Record for a job that failed, with an optional backend message
    pub fn failed(error: Option<String>) -> Self {
        Self {
            error,
            ..Self::in_flight(JobStatus::Failure)
        }
    }

    /// Parse the raw status into the closed enumeration
    pub fn status(&self) -> Result<JobStatus, UnknownJobStatus> {
        self.status.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_id_rejects_blank() {
        assert_eq!(JobId::new(""), Err(InvalidJobId));
        assert_eq!(JobId::new("   "), Err(InvalidJobId));
        assert_eq!(JobId::new("job-42").unwrap().as_str(), "job-42");
    }

    #[test]
    fn test_job_id_deserialization_validates() {
        let id: JobId = serde_json::from_value(json!("abc")).unwrap();
        assert_eq!(id.to_string(), "abc");
        assert!(serde_json::from_value::<JobId>(json!("")).is_err());
    }

    #[test]
    fn test_status_parsing_is_closed() {
        assert_eq!("PENDING".parse(), Ok(JobStatus::Pending));
        assert_eq!("PROCESSING".parse(), Ok(JobStatus::Processing));
        assert_eq!("SUCCESS".parse(), Ok(JobStatus::Success));
        assert_eq!("FAILURE".parse(), Ok(JobStatus::Failure));
        assert_eq!(
            "STARTED".parse::<JobStatus>(),
            Err(UnknownJobStatus("STARTED".to_string()))
        );
        assert!("success".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!JobStatus::Pending.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Success.is_terminal());
        assert!(JobStatus::Failure.is_terminal());
    }

    #[test]
    fn test_record_from_backend_body() {
        let record: JobRecord = serde_json::from_value(json!({
            "status": "SUCCESS",
            "job_type": "vendor_comparison",
            "payload": {"workspace_name": "acme"},
            "result": {"best_vendor": "Globex"},
            "error": null
        }))
        .unwrap();

        assert_eq!(record.status(), Ok(JobStatus::Success));
        assert_eq!(record.job_type.as_deref(), Some("vendor_comparison"));
        assert_eq!(record.result, Some(json!({"best_vendor": "Globex"})));
        assert!(record.error.is_none());
    }

    #[test]
    fn test_record_keeps_unknown_status() {
        let record: JobRecord = serde_json::from_value(json!({"status": "NOT_FOUND"})).unwrap();
        assert_eq!(
            record.status(),
            Err(UnknownJobStatus("NOT_FOUND".to_string()))
        );
    }
}
