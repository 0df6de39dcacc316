//! Knowledge base persistence

mod loader;

pub use loader::{JsonKnowledgeBaseLoader, KnowledgeBaseError};
