//! Session configuration from TOML (`[session]` section)

use super::validation::ConfigIssue;
use autostream_domain::{DomainError, SessionId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Conversation thread identifier used by the interactive loop
    pub id: String,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            id: "test_session_01".to_string(),
        }
    }
}

impl FileSessionConfig {
    pub fn to_session_id(&self) -> Result<SessionId, DomainError> {
        SessionId::new(&self.id)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        match self.to_session_id() {
            Ok(_) => Vec::new(),
            Err(e) => vec![ConfigIssue::error("session.id", e.to_string())],
        }
    }
}
