//! Knowledge base location from TOML (`[knowledge]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeConfig {
    /// JSON document with plans and policies. Created with the built-in
    /// AutoStream catalog when missing.
    pub path: String,
}

impl Default for FileKnowledgeConfig {
    fn default() -> Self {
        Self {
            path: "autostream_kb.json".to_string(),
        }
    }
}
