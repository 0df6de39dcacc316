//! Role mapping between conversation roles and a provider's role vocabulary.
//!
//! Hosted models speak a two-party dialect (requester vs. responder) whose
//! labels differ per provider: Gemini uses `user` / `model`, chat-completion
//! style APIs use `user` / `assistant`. The mapping is data, not code, so a
//! single turn processor serves every dialect.

use super::entities::{Message, Role};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Provider-side labels for each [`Role`] (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMapping {
    user: String,
    agent: String,
}

impl RoleMapping {
    pub fn new(user: impl Into<String>, agent: impl Into<String>) -> Result<Self, DomainError> {
        let user = user.into();
        let agent = agent.into();
        if user.trim().is_empty() || agent.trim().is_empty() {
            return Err(DomainError::InvalidRoleMapping(
                "role labels must not be empty".to_string(),
            ));
        }
        if user == agent {
            return Err(DomainError::InvalidRoleMapping(format!(
                "user and agent share the label '{}'",
                user
            )));
        }
        Ok(Self { user, agent })
    }

    /// Gemini `generateContent` labels.
    pub fn gemini() -> Self {
        Self {
            user: "user".to_string(),
            agent: "model".to_string(),
        }
    }

    /// Chat-completion style labels.
    pub fn chat_completion() -> Self {
        Self {
            user: "user".to_string(),
            agent: "assistant".to_string(),
        }
    }

    pub fn label(&self, role: Role) -> &str {
        match role {
            Role::User => &self.user,
            Role::Agent => &self.agent,
        }
    }

    /// Map a history to `(provider_role, text)` pairs, preserving order.
    pub fn map_history<'a>(&'a self, history: &'a [Message]) -> Vec<(&'a str, &'a str)> {
        history
            .iter()
            .map(|m| (self.label(m.role), m.content.as_str()))
            .collect()
    }
}

impl Default for RoleMapping {
    fn default() -> Self {
        Self::gemini()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gemini() {
        let mapping = RoleMapping::default();
        assert_eq!(mapping.label(Role::User), "user");
        assert_eq!(mapping.label(Role::Agent), "model");
    }

    #[test]
    fn test_map_history_preserves_order() {
        let history = vec![
            Message::user("hi"),
            Message::agent("hello"),
            Message::user("price?"),
        ];
        let mapping = RoleMapping::chat_completion();
        let mapped = mapping.map_history(&history);
        assert_eq!(
            mapped,
            vec![("user", "hi"), ("assistant", "hello"), ("user", "price?")]
        );
    }

    #[test]
    fn test_rejects_invalid_labels() {
        assert!(RoleMapping::new("", "model").is_err());
        assert!(RoleMapping::new("user", "user").is_err());
        assert!(RoleMapping::new("human", "bot").is_ok());
    }
}
