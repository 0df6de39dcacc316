//! Prompt domain
//!
//! The system instruction sent with every turn.

pub mod agent;

pub use agent::AgentPromptTemplate;
