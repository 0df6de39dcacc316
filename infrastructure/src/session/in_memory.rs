//! In-memory session repository.
//!
//! Histories live for the lifetime of the process and are keyed by
//! [`SessionId`]. Concurrent sessions are safe; each session's history is
//! only touched under the write lock, so appends never interleave.

use async_trait::async_trait;
use autostream_domain::{Message, Session, SessionId, SessionRepository};
use std::collections::HashMap;
use std::convert::Infallible;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with at least one message.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    type Error = Infallible;

    async fn history(&self, id: &SessionId) -> Result<Vec<Message>, Self::Error> {
        Ok(self
            .sessions
            .read()
            .await
            .get(id)
            .map(|s| s.messages().to_vec())
            .unwrap_or_default())
    }

    async fn append(&self, id: &SessionId, message: Message) -> Result<(), Self::Error> {
        self.sessions
            .write()
            .await
            .entry(id.clone())
            .or_insert_with(|| Session::new(id.clone()))
            .push(message);
        Ok(())
    }

    async fn clear(&self, id: &SessionId) -> Result<bool, Self::Error> {
        Ok(self.sessions.write().await.remove(id).is_some())
    }
}
