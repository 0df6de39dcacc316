//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`BehaviorConfig`]: per-call timeout for the remote model
//! - [`RetryPolicy`]: attempt cap and randomized exponential backoff

pub mod behavior;
pub mod retry_policy;

pub use behavior::BehaviorConfig;
pub use retry_policy::RetryPolicy;
