//! Presentation-level configuration
//!
//! Configuration for REPL behavior.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show a spinner while the model is working
    pub show_spinner: bool,
    /// Path to history file (`None` disables persistence)
    pub history_file: Option<PathBuf>,
    /// Input prompt
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_spinner: true,
            history_file: None,
            prompt: "You: ".to_string(),
        }
    }
}
