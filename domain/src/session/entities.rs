//! Session domain entities

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Agent => "agent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message in a conversation (Entity)
///
/// Messages are never edited after creation; a session only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            role: Role::Agent,
            content: content.into(),
        }
    }
}

/// Opaque identifier of a conversation (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session id. Blank ids are rejected.
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::InvalidSessionId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A conversation session (Entity)
///
/// Holds the ordered message history the model sees on every turn.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    messages: Vec<Message>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            messages: Vec::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_rejects_blank() {
        assert!(SessionId::new("").is_err());
        assert!(SessionId::new("   ").is_err());
        assert_eq!(SessionId::new("test_session_01").unwrap().as_str(), "test_session_01");
    }

    #[test]
    fn test_session_preserves_order() {
        let mut session = Session::new(SessionId::new("s1").unwrap());
        session.push(Message::user("hi"));
        session.push(Message::agent("Hello! How can I help?"));
        session.push(Message::user("pricing?"));

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Agent, Role::User]);
        assert_eq!(session.len(), 3);
        assert_eq!(session.messages()[1].content, "Hello! How can I help?");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Message::agent("ok")).unwrap();
        assert_eq!(json, r#"{"role":"agent","content":"ok"}"#);
    }
}
