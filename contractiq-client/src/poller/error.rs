//! Polling session errors

use contractiq_core::domain::job::JobId;
use thiserror::Error;

/// Fallback used when the backend reports a failure without a message
pub const UNKNOWN_FAILURE_MESSAGE: &str = "job failed without an error message";

/// Ways a polling session can end without a result
///
/// `E` is the error type of the status source; it is only surfaced when the
/// final permitted fetch fails.
#[derive(Debug, Error)]
pub enum PollError<E> {
    /// The backend reported a terminal failure for the job
    #[error("job {job_id} failed: {message}")]
    JobFailed { job_id: JobId, message: String },

    /// The job was still pending after every permitted status check
    #[error("job {job_id} did not finish after {attempts} status checks")]
    PollingTimeout { job_id: JobId, attempts: u32 },

    /// The backend returned a status outside the known enumeration
    #[error("job {job_id} reported unrecognized status '{status}'")]
    UnrecognizedStatus { job_id: JobId, status: String },

    /// The status fetch itself failed on the last permitted attempt
    #[error("failed to fetch job status: {0}")]
    Transport(#[source] E),
}

impl<E> PollError<E> {
    /// Id of the job the session was watching, when the error carries it
    pub fn job_id(&self) -> Option<&JobId> {
        match self {
            PollError::JobFailed { job_id, .. }
            | PollError::PollingTimeout { job_id, .. }
            | PollError::UnrecognizedStatus { job_id, .. } => Some(job_id),
            PollError::Transport(_) => None,
        }
    }
}
