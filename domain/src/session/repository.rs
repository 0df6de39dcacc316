//! Session repository trait

use super::entities::{Message, SessionId};
use async_trait::async_trait;

/// Repository trait for conversation sessions
///
/// This is a domain-level abstraction over where session histories live.
/// Histories of different sessions are never visible to each other.
/// Implementations live in the infrastructure layer.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Error type for repository operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Full history of a session, oldest first. Unknown sessions are empty.
    async fn history(&self, id: &SessionId) -> Result<Vec<Message>, Self::Error>;

    /// Append a message, creating the session on first use.
    async fn append(&self, id: &SessionId, message: Message) -> Result<(), Self::Error>;

    /// Drop a session's history. Returns whether the session existed.
    async fn clear(&self, id: &SessionId) -> Result<bool, Self::Error>;
}
