//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section falls back to its defaults, so an empty file is valid.

mod knowledge;
mod logging;
mod model;
mod repl;
mod retry;
mod roles;
mod session;
mod validation;

pub use knowledge::FileKnowledgeConfig;
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use repl::FileReplConfig;
pub use retry::FileRetryConfig;
pub use roles::FileRolesConfig;
pub use session::FileSessionConfig;
pub use validation::{ConfigIssue, Severity};

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Hosted model and credentials
    pub model: FileModelConfig,
    /// Retry and backoff for model calls
    pub retry: FileRetryConfig,
    /// Provider role labels
    pub roles: FileRolesConfig,
    /// Knowledge base document
    pub knowledge: FileKnowledgeConfig,
    /// Interactive session
    pub session: FileSessionConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Transcript and log files
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Warnings describe values that were replaced by a fallback; errors
    /// mean the agent should not start.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.model.validate());
        issues.extend(self.retry.validate());
        issues.extend(self.roles.to_role_mapping().1);
        issues.extend(self.session.validate());
        if self.knowledge.path.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "knowledge.path",
                "knowledge base path cannot be empty",
            ));
        }
        issues
    }
}
