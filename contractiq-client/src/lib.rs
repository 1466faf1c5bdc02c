//! ContractIQ HTTP Client
//!
//! A typed HTTP client for the ContractIQ backend, plus the job poller used to
//! wait on long-running workflows.
//!
//! Workflows (contract scoring, audits, vendor comparison, ...) are submitted
//! through [`ContractIqClient`]. In asynchronous mode the backend answers with a
//! job id, which a [`JobPoller`] then watches until the job succeeds, fails or
//! the polling session gives up.
//!
//! # Example
//!
//! ```no_run
//! use contractiq_client::{ContractIqClient, JobPoller, PollOptions};
//! use contractiq_core::dto::workflow::{VendorComparisonRequest, VendorRef};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContractIqClient::new("http://localhost:8000");
//!
//! let submitted = client
//!     .compare_vendors(
//!         &VendorComparisonRequest {
//!             vendors: vec![VendorRef::parse("Globex@Berlin"), VendorRef::parse("Initech@Austin")],
//!             workspace_name: "acme".to_string(),
//!         },
//!         true,
//!     )
//!     .await?;
//!
//! let poller = JobPoller::new(client, PollOptions::default());
//! let outcome = poller.resolve(submitted, CancellationToken::new()).await?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod jobs;
pub mod poller;
mod workflows;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{
    Backoff, InvalidPollOptions, JobPoller, JobStatusSource, PollError, PollOptions, PollOutcome,
    PollProgress,
};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the ContractIQ backend API
///
/// Endpoints are organized into logical groups:
/// - Job tracking (status lookups, generic submission, worker health)
/// - Workflow submission (Q&A, scoring, audits, vendor research)
#[derive(Debug, Clone)]
pub struct ContractIqClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl ContractIqClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:8000")
    ///
    /// # Example
    /// ```
    /// use contractiq_client::ContractIqClient;
    ///
    /// let client = ContractIqClient::new("http://localhost:8000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// Status fetches have no timeout of their own otherwise.
    ///
    /// # Example
    /// ```
    /// use contractiq_client::ContractIqClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = ContractIqClient::with_client("http://localhost:8000", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an endpoint URL from raw path segments
    ///
    /// Every segment is percent-encoded, so a job id or workspace name holding
    /// `/`, `?` or `#` stays inside its own segment.
    fn endpoint<I>(&self, segments: I) -> Result<Url>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = Url::parse(&self.base_url).map_err(|e| {
            ClientError::InvalidRequest(format!("invalid base URL '{}': {}", self.base_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidRequest(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code and deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ContractIqClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ContractIqClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(
            client.endpoint(["jobs", "abc"]).unwrap().as_str(),
            "http://localhost:8000/jobs/abc"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let client = ContractIqClient::new("https://contractiq.example.com/api/");
        assert_eq!(
            client.endpoint(["worker", "status"]).unwrap().as_str(),
            "https://contractiq.example.com/api/worker/status"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let client = ContractIqClient::new("http://localhost:8000");

        let url = client.endpoint(["jobs", "job-1?x=1"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/jobs/job-1%3Fx=1");
        assert_eq!(url.query(), None);

        let url = client.endpoint(["score-resumes", "team/a#b"]).unwrap();
        assert_eq!(url.path(), "/score-resumes/team%2Fa%23b");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        let client = ContractIqClient::new("localhost:8000");
        assert!(matches!(
            client.endpoint(["jobs"]),
            Err(ClientError::InvalidRequest(_))
        ));

        let client = ContractIqClient::new("not a url");
        assert!(matches!(
            client.endpoint(["jobs"]),
            Err(ClientError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = ContractIqClient::with_client("http://localhost:8000", http_client);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
