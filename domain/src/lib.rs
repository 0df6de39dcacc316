//! Domain layer for autostream-agent
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Turn
//!
//! A turn is one round trip: the full session history goes to the model,
//! the free-text answer comes back and is parsed into a [`TurnResult`]
//! (an [`Intent`] label plus the reply shown to the user).
//!
//! ## Lead
//!
//! Once the model has gathered name, email and creator platform it appends
//! a `LEAD_COMPLETE:` line to its reply. [`detect_lead`] turns that line
//! into a [`Lead`] payload for the capture side effect.

pub mod core;
pub mod intent;
pub mod knowledge;
pub mod lead;
pub mod prompt;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use intent::{
    entities::{Intent, TurnResult},
    parsing::{RESPONSE_MARKER, parse_model_output},
};
pub use knowledge::KnowledgeBase;
pub use lead::{LEAD_MARKER, Lead, detect_lead};
pub use prompt::AgentPromptTemplate;
pub use session::{
    entities::{Message, Role, Session, SessionId},
    repository::SessionRepository,
    role_mapping::RoleMapping,
};
