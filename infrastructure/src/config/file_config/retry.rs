//! Retry configuration from TOML (`[retry]` section)

use super::validation::ConfigIssue;
use autostream_application::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw retry configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Total attempts including the first call
    pub max_attempts: u32,
    /// Lower bound of each backoff wait in milliseconds
    pub initial_delay_ms: u64,
    /// Upper bound of each backoff wait in milliseconds
    pub max_delay_ms: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        let policy = RetryPolicy::default();
        Self {
            max_attempts: policy.max_attempts,
            initial_delay_ms: policy.initial_delay.as_millis() as u64,
            max_delay_ms: policy.max_delay.as_millis() as u64,
        }
    }
}

impl FileRetryConfig {
    pub fn to_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_attempts.max(1),
            Duration::from_millis(self.initial_delay_ms),
            Duration::from_millis(self.max_delay_ms.max(self.initial_delay_ms)),
        )
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.max_attempts == 0 {
            issues.push(ConfigIssue::warning(
                "retry.max_attempts",
                "must be at least 1, using a single attempt",
            ));
        }
        if self.initial_delay_ms > self.max_delay_ms {
            issues.push(ConfigIssue::warning(
                "retry.initial_delay_ms",
                format!(
                    "initial delay {}ms exceeds max delay {}ms, raising the cap",
                    self.initial_delay_ms, self.max_delay_ms
                ),
            ));
        }
        issues
    }
}
