//! Conversation session domain.
//!
//! - [`entities::Session`]: the ordered history of one conversation
//! - [`entities::Message`]: a single message within a session
//! - [`repository::SessionRepository`]: trait for session persistence
//! - [`role_mapping::RoleMapping`]: translation of [`entities::Role`] to a provider's vocabulary

pub mod entities;
pub mod repository;
pub mod role_mapping;
