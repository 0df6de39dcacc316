//! Error types for the Gemini adapter

use super::protocol::ApiErrorBody;
use autostream_application::GatewayError;
use thiserror::Error;

/// Errors that can occur when calling the Gemini API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("API key not set (checked config and ${0})")]
    MissingApiKey(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("No usable text: {0}")]
    EmptyResponse(String),
}

impl GeminiError {
    /// Classify a transport-level failure.
    pub fn from_reqwest(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            GeminiError::Timeout
        } else {
            GeminiError::Transport(e)
        }
    }

    /// Build a status error from a non-success response body.
    ///
    /// Google wraps failures as `{"error": {"message": ...}}`; anything
    /// else is kept as a truncated raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ApiErrorBody>(body)
            .map(|b| b.error.message)
            .ok()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| autostream_domain::util::truncate_str(body.trim(), 200).to_string());
        GeminiError::Status { status, message }
    }
}

impl From<GeminiError> for GatewayError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::MissingApiKey(_) | GeminiError::Client(_) => {
                GatewayError::Configuration(e.to_string())
            }
            GeminiError::Timeout => GatewayError::Timeout,
            GeminiError::Transport(inner) => GatewayError::ConnectionError(inner.to_string()),
            GeminiError::Status { status, message } => match status {
                429 => GatewayError::RateLimited(message),
                408 => GatewayError::Timeout,
                500 | 502 | 503 | 504 => GatewayError::ServerError { status, message },
                _ => GatewayError::ApiError { status, message },
            },
            GeminiError::Decode(msg) | GeminiError::EmptyResponse(msg) => {
                GatewayError::InvalidResponse(msg)
            }
        }
    }
}
