//! Retry policy for remote model calls.
//!
//! Randomized exponential backoff: before retry `n` (0-based) the wait is
//! drawn uniformly from `[initial, min(max, initial * 2^n)]`. The attempt
//! cap counts the first call, so `max_attempts = 5` means one call plus up
//! to four retries.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Attempt cap and backoff bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts including the first call.
    pub max_attempts: u32,
    /// Lower bound of every backoff wait.
    pub initial_delay: Duration,
    /// Upper bound of every backoff wait.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, initial_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts,
            initial_delay,
            max_delay,
        }
    }

    /// Retry without waiting between attempts.
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO, Duration::ZERO)
    }

    /// A single attempt, no retries.
    pub fn no_retry() -> Self {
        Self::immediate(1)
    }

    /// Attempt cap, never below one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Upper bound of the wait before retry `retry` (0-based).
    pub fn backoff_ceiling(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.min(31));
        self.initial_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }

    /// Randomized wait before retry `retry` (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let high = self.backoff_ceiling(retry);
        let low = self.initial_delay.min(high);
        if high <= low {
            return high;
        }
        let millis = rand::thread_rng().gen_range(low.as_millis()..=high.as_millis());
        Duration::from_millis(millis as u64)
    }
}
