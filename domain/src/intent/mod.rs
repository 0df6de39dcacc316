//! Intent classification domain.
//!
//! - [`entities::Intent`]: the four intent labels
//! - [`entities::TurnResult`]: reply + intent produced by one turn
//! - [`parsing::parse_model_output`]: free-text model output to [`entities::TurnResult`]

pub mod entities;
pub mod parsing;
