//! Infrastructure layer for autostream-agent
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod knowledge;
pub mod lead;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, Severity};
pub use gemini::{GeminiError, GeminiGateway, GeminiSettings};
pub use knowledge::{JsonKnowledgeBaseLoader, KnowledgeBaseError};
pub use lead::MockLeadCapture;
pub use logging::JsonlConversationLogger;
pub use session::InMemorySessionRepository;
