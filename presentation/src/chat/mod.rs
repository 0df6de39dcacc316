//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for the agent.

mod repl;

pub use repl::{ChatRepl, ReplCommand, ReplInput};
