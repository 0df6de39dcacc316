//! Presentation layer for autostream-agent
//!
//! This crate contains the CLI definition, console formatting, the waiting
//! spinner and the interactive chat loop.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use config::ReplConfig;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::ThinkingSpinner;
