//! Role mapping from TOML (`[roles]` section)

use super::validation::ConfigIssue;
use autostream_domain::RoleMapping;
use serde::{Deserialize, Serialize};

/// Provider labels for the two conversation roles
///
/// ```toml
/// [roles]
/// user = "user"
/// agent = "model"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRolesConfig {
    pub user: String,
    pub agent: String,
}

impl Default for FileRolesConfig {
    fn default() -> Self {
        let mapping = RoleMapping::default();
        Self {
            user: mapping.label(autostream_domain::Role::User).to_string(),
            agent: mapping.label(autostream_domain::Role::Agent).to_string(),
        }
    }
}

impl FileRolesConfig {
    /// Parse into a [`RoleMapping`], falling back to the default on invalid labels.
    pub fn to_role_mapping(&self) -> (RoleMapping, Vec<ConfigIssue>) {
        match RoleMapping::new(&self.user, &self.agent) {
            Ok(mapping) => (mapping, Vec::new()),
            Err(e) => (
                RoleMapping::default(),
                vec![ConfigIssue::warning(
                    "roles",
                    format!("{}, falling back to user/model", e),
                )],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autostream_domain::Role;

    #[test]
    fn test_custom_labels() {
        let config = FileRolesConfig {
            user: "user".to_string(),
            agent: "assistant".to_string(),
        };
        let (mapping, issues) = config.to_role_mapping();
        assert!(issues.is_empty());
        assert_eq!(mapping.label(Role::Agent), "assistant");
    }

    #[test]
    fn test_invalid_labels_fall_back() {
        let config = FileRolesConfig {
            user: "same".to_string(),
            agent: "same".to_string(),
        };
        let (mapping, issues) = config.to_role_mapping();
        assert_eq!(mapping, RoleMapping::default());
        assert_eq!(issues.len(), 1);
    }
}
