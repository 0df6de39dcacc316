//! Application behavior configuration.

use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for model calls.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a single model call before timing out.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// `None` or `0` disables the timeout.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_timeout_seconds() {
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(60)).timeout,
            Some(Duration::from_secs(60))
        );
        assert!(BehaviorConfig::from_timeout_seconds(Some(0)).timeout.is_none());
        assert!(BehaviorConfig::from_timeout_seconds(None).timeout.is_none());
        assert!(BehaviorConfig::default().timeout.is_none());
    }
}
