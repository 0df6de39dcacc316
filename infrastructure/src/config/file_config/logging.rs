//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Where logs go besides stderr
///
/// ```toml
/// [logging]
/// transcript = "~/.local/share/autostream/transcript.jsonl"
/// file = "autostream.log"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL conversation transcript
    pub transcript: Option<String>,
    /// Plain-text tracing log (daily rotation)
    pub file: Option<String>,
}
