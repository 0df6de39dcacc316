//! Configuration file loading for autostream-agent
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `AUTOSTREAM_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./autostream.toml` or `./.autostream.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/autostream-agent/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, FileConfig, FileKnowledgeConfig, FileLoggingConfig, FileModelConfig,
    FileReplConfig, FileRetryConfig, FileRolesConfig, FileSessionConfig, Severity,
};
pub use loader::ConfigLoader;
