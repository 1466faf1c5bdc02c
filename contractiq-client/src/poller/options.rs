//! Polling session options

use std::num::NonZeroU32;
use std::time::Duration;

use thiserror::Error;

/// Default number of status fetches before a session times out
pub const DEFAULT_MAX_ATTEMPTS: u32 = 600;

/// Default wait between two status fetches
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPollOptions {
    #[error("max_attempts must be greater than 0")]
    ZeroAttempts,
    #[error("poll_interval must be greater than 0")]
    ZeroInterval,
    #[error("backoff factor must be at least 1")]
    BackoffFactor,
}

/// How the wait between polls evolves over a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backoff {
    /// Always wait `poll_interval`
    #[default]
    Fixed,
    /// Multiply the wait by `factor` after every poll, up to `max_interval`
    Exponential { factor: u32, max_interval: Duration },
}

/// Limits of one polling session
///
/// The worst-case session length is bounded by the attempt cap, not by a
/// wall-clock deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    max_attempts: NonZeroU32,
    poll_interval: Duration,
    backoff: Backoff,
}

impl PollOptions {
    pub fn new(max_attempts: u32, poll_interval: Duration) -> Result<Self, InvalidPollOptions> {
        let max_attempts = NonZeroU32::new(max_attempts).ok_or(InvalidPollOptions::ZeroAttempts)?;
        if poll_interval.is_zero() {
            return Err(InvalidPollOptions::ZeroInterval);
        }

        Ok(Self {
            max_attempts,
            poll_interval,
            backoff: Backoff::Fixed,
        })
    }

    /// Replace the fixed interval with a growing one
    pub fn with_backoff(mut self, backoff: Backoff) -> Result<Self, InvalidPollOptions> {
        if let Backoff::Exponential { factor, .. } = backoff {
            if factor == 0 {
                return Err(InvalidPollOptions::BackoffFactor);
            }
        }
        self.backoff = backoff;
        Ok(self)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts.get()
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn backoff(&self) -> Backoff {
        self.backoff
    }

    /// Wait that follows the given (1-based) unsuccessful attempt
    pub fn delay_after(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.poll_interval,
            Backoff::Exponential {
                factor,
                max_interval,
            } => {
                let exponent = attempt.saturating_sub(1);
                let multiplier = factor.checked_pow(exponent).unwrap_or(u32::MAX);
                self.poll_interval
                    .checked_mul(multiplier)
                    .unwrap_or(Duration::MAX)
                    .min(max_interval.max(self.poll_interval))
            }
        }
    }

    /// Upper bound on time spent waiting in one session
    ///
    /// The last attempt never waits, so there are `max_attempts - 1` waits.
    pub fn worst_case_wait(&self) -> Duration {
        (1..self.max_attempts())
            .map(|attempt| self.delay_after(attempt))
            .fold(Duration::ZERO, |total, delay| total.saturating_add(delay))
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            max_attempts: NonZeroU32::new(DEFAULT_MAX_ATTEMPTS).unwrap_or(NonZeroU32::MIN),
            poll_interval: DEFAULT_POLL_INTERVAL,
            backoff: Backoff::Fixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = PollOptions::default();
        assert_eq!(options.max_attempts(), 600);
        assert_eq!(options.poll_interval(), Duration::from_millis(3000));
        assert_eq!(options.backoff(), Backoff::Fixed);
        assert_eq!(options.worst_case_wait(), Duration::from_millis(599 * 3000));
    }

    #[test]
    fn test_rejects_zero_values() {
        assert_eq!(
            PollOptions::new(0, Duration::from_secs(1)),
            Err(InvalidPollOptions::ZeroAttempts)
        );
        assert_eq!(
            PollOptions::new(5, Duration::ZERO),
            Err(InvalidPollOptions::ZeroInterval)
        );

        let options = PollOptions::new(5, Duration::from_millis(10)).unwrap();
        assert_eq!(
            options.with_backoff(Backoff::Exponential {
                factor: 0,
                max_interval: Duration::from_secs(1),
            }),
            Err(InvalidPollOptions::BackoffFactor)
        );
    }

    #[test]
    fn test_fixed_delay_is_constant() {
        let options = PollOptions::new(5, Duration::from_millis(10)).unwrap();
        assert_eq!(options.delay_after(1), Duration::from_millis(10));
        assert_eq!(options.delay_after(4), Duration::from_millis(10));
        assert_eq!(options.worst_case_wait(), Duration::from_millis(40));
    }

    #[test]
    fn test_exponential_delay_is_capped() {
        let options = PollOptions::new(10, Duration::from_millis(100))
            .unwrap()
            .with_backoff(Backoff::Exponential {
                factor: 2,
                max_interval: Duration::from_millis(500),
            })
            .unwrap();

        assert_eq!(options.delay_after(1), Duration::from_millis(100));
        assert_eq!(options.delay_after(2), Duration::from_millis(200));
        assert_eq!(options.delay_after(3), Duration::from_millis(400));
        assert_eq!(options.delay_after(4), Duration::from_millis(500));
        assert_eq!(options.delay_after(60), Duration::from_millis(500));
    }

    #[test]
    fn test_cap_below_interval_keeps_interval() {
        let options = PollOptions::new(3, Duration::from_millis(100))
            .unwrap()
            .with_backoff(Backoff::Exponential {
                factor: 3,
                max_interval: Duration::from_millis(50),
            })
            .unwrap();

        assert_eq!(options.delay_after(1), Duration::from_millis(100));
        assert_eq!(options.delay_after(2), Duration::from_millis(100));
    }
}
