//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid session id: {0}")]
    InvalidSessionId(String),

    #[error("Unknown intent label: {0}")]
    UnknownIntent(String),

    #[error("Invalid role mapping: {0}")]
    InvalidRoleMapping(String),
}
