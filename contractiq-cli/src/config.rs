//! Configuration module
//!
//! Resolves backend connection and polling settings from command-line flags
//! (which fall back to `CONTRACTIQ_*` environment variables).

use std::time::Duration;

use anyhow::{Context, Result};
use contractiq_client::{Backoff, PollOptions};

/// Exponential backoff doubles the wait between polls
const BACKOFF_FACTOR: u32 = 2;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ContractIQ backend
    pub api_url: String,

    /// Limits of every polling session
    pub poll: PollOptions,

    /// Submit workflows as background jobs (`async_mode=true`)
    pub async_mode: bool,

    /// Timeout of a single HTTP request, including each status fetch
    pub request_timeout: Duration,
}

impl Config {
    /// Build the configuration from raw flag values
    ///
    /// # Arguments
    /// * `api_url` - Backend base URL
    /// * `max_attempts` - Status fetches per polling session
    /// * `poll_interval_ms` - Wait between fetches, in milliseconds
    /// * `backoff_max_ms` - Enables exponential backoff capped at this wait
    /// * `sync` - Run workflows inline instead of as jobs
    /// * `request_timeout_secs` - Per-request HTTP timeout
    pub fn new(
        api_url: String,
        max_attempts: u32,
        poll_interval_ms: u64,
        backoff_max_ms: Option<u64>,
        sync: bool,
        request_timeout_secs: u64,
    ) -> Result<Self> {
        let mut poll = PollOptions::new(max_attempts, Duration::from_millis(poll_interval_ms))
            .context("Invalid polling options")?;

        if let Some(max_ms) = backoff_max_ms {
            poll = poll
                .with_backoff(Backoff::Exponential {
                    factor: BACKOFF_FACTOR,
                    max_interval: Duration::from_millis(max_ms),
                })
                .context("Invalid backoff options")?;
        }

        Ok(Self {
            api_url,
            poll,
            async_mode: !sync,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be greater than 0");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> Config {
        Config::new(url.to_string(), 600, 3000, None, false, 30).unwrap()
    }

    #[test]
    fn test_default_values() {
        let config = config("http://localhost:8000");
        assert_eq!(config.poll, PollOptions::default());
        assert!(config.async_mode);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(config("not-a-url").validate().is_err());
        assert!(config("").validate().is_err());
        assert!(config("https://contractiq.example.com").validate().is_ok());

        let mut no_timeout = config("http://localhost:8000");
        no_timeout.request_timeout = Duration::ZERO;
        assert!(no_timeout.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_polling_values() {
        assert!(Config::new("http://x".to_string(), 0, 3000, None, false, 30).is_err());
        assert!(Config::new("http://x".to_string(), 10, 0, None, false, 30).is_err());
    }

    #[test]
    fn test_backoff_flag() {
        let config =
            Config::new("http://x".to_string(), 10, 1000, Some(8000), true, 30).unwrap();

        assert!(!config.async_mode);
        assert_eq!(
            config.poll.backoff(),
            Backoff::Exponential {
                factor: 2,
                max_interval: Duration::from_millis(8000),
            }
        );
        assert_eq!(config.poll.delay_after(3), Duration::from_millis(4000));
    }
}
