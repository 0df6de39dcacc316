//! Model configuration from TOML (`[model]` section)

use super::validation::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Hosted model settings
///
/// # Example
///
/// ```toml
/// [model]
/// name = "gemini-2.5-flash"
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_secs = 60
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Model identifier passed to the API
    pub name: String,
    /// Base URL of the Generative Language API
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`)
    pub api_key: Option<String>,
    /// Per-call timeout in seconds (0 disables it)
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 60,
            connect_timeout_secs: 10,
        }
    }
}

impl FileModelConfig {
    /// API key from the config file, falling back to `api_key_env`.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.name.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "model.name",
                "model name cannot be empty",
            ));
        }
        if self.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "model.base_url",
                "base URL cannot be empty",
            ));
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_api_key_wins() {
        let config = FileModelConfig {
            api_key: Some("direct".to_string()),
            api_key_env: "AUTOSTREAM_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), Some("direct".to_string()));
    }

    #[test]
    fn test_missing_api_key() {
        let config = FileModelConfig {
            api_key: Some("  ".to_string()),
            api_key_env: "AUTOSTREAM_TEST_DEFINITELY_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(), None);
    }

    #[test]
    fn test_empty_name_is_error() {
        let config = FileModelConfig {
            name: String::new(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(issues[0].field, "model.name");
    }
}
