//! Gemini adapter
//!
//! Implements the `ModelGateway` port over HTTPS with reqwest.

pub mod error;
pub mod gateway;
pub mod protocol;

pub use error::GeminiError;
pub use gateway::{GeminiGateway, GeminiSettings};
