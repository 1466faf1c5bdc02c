//! Job poller
//!
//! Watches one job until it reaches a terminal status. Each call is an
//! independent polling session: polls are strictly sequential, the only waits
//! are the fixed (or backed-off) pauses between polls, and nothing is shared
//! between sessions watching different jobs.
//!
//! A session ends with exactly one of:
//! - the job's result payload (`SUCCESS`)
//! - [`PollError::JobFailed`] (`FAILURE`)
//! - [`PollError::PollingTimeout`] once `max_attempts` fetches saw a pending job
//! - [`PollError::UnrecognizedStatus`] for any status outside the enumeration
//! - [`PollError::Transport`] when the final permitted fetch fails
//! - [`PollOutcome::Cancelled`] when the caller stops watching
//!
//! Failed fetches before the final attempt count as attempts but are
//! otherwise treated as "still pending".

mod error;
mod options;

pub use error::{PollError, UNKNOWN_FAILURE_MESSAGE};
pub use options::{
    Backoff, DEFAULT_MAX_ATTEMPTS, DEFAULT_POLL_INTERVAL, InvalidPollOptions, PollOptions,
};

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use contractiq_core::domain::job::{JobId, JobRecord, JobStatus, UnknownJobStatus};
use contractiq_core::dto::job::SubmitResponse;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Read-only access to job state
///
/// Implemented by [`crate::ContractIqClient`]; tests substitute scripted
/// sources.
#[async_trait]
pub trait JobStatusSource: Send + Sync {
    /// Transport-level failure of a single fetch
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the current record of a job
    async fn fetch_job(&self, job_id: &JobId) -> Result<JobRecord, Self::Error>;
}

#[async_trait]
impl<S: JobStatusSource> JobStatusSource for Arc<S> {
    type Error = S::Error;

    async fn fetch_job(&self, job_id: &JobId) -> Result<JobRecord, Self::Error> {
        (**self).fetch_job(job_id).await
    }
}

/// How a session that did not fail ended
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The job succeeded with this result (`null` if the backend sent none)
    Completed(Value),
    /// The caller stopped watching before the job finished
    Cancelled,
}

impl PollOutcome {
    pub fn into_result(self) -> Option<Value> {
        match self {
            PollOutcome::Completed(result) => Some(result),
            PollOutcome::Cancelled => None,
        }
    }
}

/// Snapshot reported after every non-terminal observation
#[derive(Debug, Clone, PartialEq)]
pub struct PollProgress {
    pub job_id: JobId,
    /// 1-based number of the fetch just made
    pub attempt: u32,
    pub max_attempts: u32,
    /// Observed status, or `None` if the fetch failed
    pub status: Option<JobStatus>,
    /// Wait before the next fetch
    pub next_delay: Duration,
}

type ProgressCallback = Arc<dyn Fn(&PollProgress) + Send + Sync>;

/// Polls a [`JobStatusSource`] until a job finishes
pub struct JobPoller<S> {
    source: S,
    options: PollOptions,
    on_progress: Option<ProgressCallback>,
}

impl<S: JobStatusSource> JobPoller<S> {
    pub fn new(source: S, options: PollOptions) -> Self {
        Self {
            source,
            options,
            on_progress: None,
        }
    }

    /// Register a callback invoked after every non-terminal observation
    pub fn with_progress(
        mut self,
        callback: impl Fn(&PollProgress) + Send + Sync + 'static,
    ) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// Wait for a job and return its result payload
    pub async fn poll(&self, job_id: &JobId) -> Result<Value, PollError<S::Error>> {
        match self.run(job_id, &Uncancellable).await? {
            Ok(result) => Ok(result),
            Err(never) => match never {},
        }
    }

    /// Wait for a job, giving up quietly once `cancel` fires
    ///
    /// The token is honoured at both suspension points: an in-flight fetch is
    /// dropped and a pending wait is cut short.
    pub async fn poll_until_cancelled(
        &self,
        job_id: &JobId,
        cancel: CancellationToken,
    ) -> Result<PollOutcome, PollError<S::Error>> {
        Ok(match self.run(job_id, &cancel).await? {
            Ok(result) => PollOutcome::Completed(result),
            Err(()) => PollOutcome::Cancelled,
        })
    }

    /// Turn a submit response into a final outcome
    ///
    /// Inline results are returned as they are; queued jobs are polled.
    pub async fn resolve(
        &self,
        submitted: SubmitResponse,
        cancel: CancellationToken,
    ) -> Result<PollOutcome, PollError<S::Error>> {
        match submitted {
            SubmitResponse::Immediate(result) => Ok(PollOutcome::Completed(result)),
            SubmitResponse::Queued(queued) => {
                self.poll_until_cancelled(&queued.job_id, cancel).await
            }
        }
    }

    /// One polling session; the inner `Err` carries the cancel signal's value
    async fn run<C: CancelSignal>(
        &self,
        job_id: &JobId,
        cancel: &C,
    ) -> Result<Result<Value, C::Cancelled>, PollError<S::Error>> {
        let max_attempts = self.options.max_attempts();
        let mut attempt = 0;

        loop {
            if let Some(cancelled) = cancel.check() {
                debug!(%job_id, attempt, "Polling cancelled before fetch");
                return Ok(Err(cancelled));
            }

            attempt += 1;
            trace!(%job_id, attempt, max_attempts, "Fetching job status");

            let fetched = tokio::select! {
                biased;
                cancelled = cancel.cancelled() => {
                    debug!(%job_id, attempt, "Polling cancelled during fetch");
                    return Ok(Err(cancelled));
                }
                fetched = self.source.fetch_job(job_id) => fetched,
            };

            let observed = match fetched {
                Ok(record) => match record.status() {
                    Ok(JobStatus::Success) => {
                        debug!(%job_id, attempt, "Job succeeded");
                        return Ok(Ok(record.result.unwrap_or(Value::Null)));
                    }
                    Ok(JobStatus::Failure) => {
                        debug!(%job_id, attempt, "Job failed");
                        return Err(PollError::JobFailed {
                            job_id: job_id.clone(),
                            message: record
                                .error
                                .unwrap_or_else(|| UNKNOWN_FAILURE_MESSAGE.to_string()),
                        });
                    }
                    Ok(status) => {
                        if attempt >= max_attempts {
                            return Err(PollError::PollingTimeout {
                                job_id: job_id.clone(),
                                attempts: attempt,
                            });
                        }
                        Some(status)
                    }
                    Err(UnknownJobStatus(status)) => {
                        return Err(PollError::UnrecognizedStatus {
                            job_id: job_id.clone(),
                            status,
                        });
                    }
                },
                Err(err) => {
                    if attempt >= max_attempts {
                        return Err(PollError::Transport(err));
                    }
                    debug!(%job_id, attempt, error = %err, "Status fetch failed, retrying");
                    None
                }
            };

            let delay = self.options.delay_after(attempt);
            if let Some(callback) = &self.on_progress {
                callback(&PollProgress {
                    job_id: job_id.clone(),
                    attempt,
                    max_attempts,
                    status: observed,
                    next_delay: delay,
                });
            }

            if let Some(cancelled) = cancel.check() {
                debug!(%job_id, attempt, "Polling cancelled before wait");
                return Ok(Err(cancelled));
            }

            tokio::select! {
                biased;
                cancelled = cancel.cancelled() => {
                    debug!(%job_id, attempt, "Polling cancelled during wait");
                    return Ok(Err(cancelled));
                }
                _ = tokio::time::sleep(delay) => {}
            }
        }
    }
}

/// Stop signal observed by a polling session
trait CancelSignal: Sync {
    /// Value a cancelled session ends with
    type Cancelled;

    fn check(&self) -> Option<Self::Cancelled>;

    /// Resolves once the session should stop
    fn cancelled(&self) -> impl Future<Output = Self::Cancelled> + Send + '_;
}

impl CancelSignal for CancellationToken {
    type Cancelled = ();

    fn check(&self) -> Option<()> {
        self.is_cancelled().then_some(())
    }

    fn cancelled(&self) -> impl Future<Output = ()> + Send + '_ {
        CancellationToken::cancelled(self)
    }
}

/// Signal of a session that runs until the job settles
struct Uncancellable;

impl CancelSignal for Uncancellable {
    type Cancelled = Infallible;

    fn check(&self) -> Option<Infallible> {
        None
    }

    fn cancelled(&self) -> impl Future<Output = Infallible> + Send + '_ {
        std::future::pending()
    }
}
