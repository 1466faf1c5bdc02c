//! Job-related API endpoints

use async_trait::async_trait;
use contractiq_core::domain::job::{JobId, JobRecord, JobStatus};
use contractiq_core::domain::workflow::Workflow;
use contractiq_core::dto::job::SubmitResponse;
use contractiq_core::dto::worker::WorkerStatus;

use crate::ContractIqClient;
use crate::error::{ClientError, Result};
use crate::poller::JobStatusSource;

/// Status the backend's worker records once it picks a job up
const BACKEND_STARTED: &str = "STARTED";

impl ContractIqClient {
    // =============================================================================
    // Job Tracking
    // =============================================================================

    /// Get the current state of a job
    ///
    /// # Arguments
    /// * `job_id` - The id returned when the job was submitted
    ///
    /// # Returns
    /// The job record; its status may be outside the known enumeration
    pub async fn get_job(&self, job_id: &JobId) -> Result<JobRecord> {
        let url = self.endpoint(["jobs", job_id.as_str()])?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }

    /// Queue a job of an arbitrary type through the generic job endpoint
    ///
    /// # Arguments
    /// * `job_type` - Backend job type, e.g. `score_contracts`
    /// * `payload` - Job payload, passed through unchanged
    ///
    /// # Returns
    /// The id of the queued job
    pub async fn submit_job(&self, job_type: &str, payload: &serde_json::Value) -> Result<JobId> {
        if job_type.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "job type must not be empty".to_string(),
            ));
        }

        let url = self.endpoint(["jobs", job_type])?;
        let response = self.client.post(url).json(payload).send().await?;

        match self.handle_response(response).await? {
            SubmitResponse::Queued(submitted) => Ok(submitted.job_id),
            SubmitResponse::Immediate(body) => Err(ClientError::ParseError(format!(
                "expected a job id, got {}",
                body
            ))),
        }
    }

    /// Queue a catalogued workflow through the generic job endpoint
    pub async fn submit_workflow(
        &self,
        workflow: Workflow,
        payload: &serde_json::Value,
    ) -> Result<JobId> {
        self.submit_job(workflow.job_type(), payload).await
    }

    /// Check whether the backend's job worker is up
    pub async fn worker_status(&self) -> Result<WorkerStatus> {
        let url = self.endpoint(["worker", "status"])?;
        let response = self.client.get(url).send().await?;

        self.handle_response(response).await
    }
}

#[async_trait]
impl JobStatusSource for ContractIqClient {
    type Error = ClientError;

    /// Fetch a job for polling
    ///
    /// The backend's worker reports a running job as `STARTED`; it is
    /// observed as `PROCESSING`. Every other status passes through unchanged.
    async fn fetch_job(&self, job_id: &JobId) -> Result<JobRecord> {
        let mut record = self.get_job(job_id).await?;
        if record.status == BACKEND_STARTED {
            record.status = JobStatus::Processing.as_str().to_string();
        }
        Ok(record)
    }
}
