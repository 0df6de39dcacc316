//! Model Gateway port
//!
//! Defines the interface for communicating with the hosted language model.

use async_trait::async_trait;
use autostream_domain::{Message, RoleMapping};
use thiserror::Error;

/// Errors that can occur during model gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Whether the failure is worth retrying.
    ///
    /// Rate limits, 5xx responses, timeouts and connection failures are
    /// transient. Client errors, bad payloads and configuration problems
    /// fail the same way on every attempt.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_)
                | GatewayError::RateLimited(_)
                | GatewayError::ServerError { .. }
                | GatewayError::Timeout
        )
    }
}

/// One turn of conversation in the provider's role vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTurn {
    pub role: String,
    pub text: String,
}

/// Everything the model sees for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub system_instruction: String,
    pub turns: Vec<ModelTurn>,
}

impl GenerateRequest {
    /// Build a request from session history, mapping roles through `roles`.
    pub fn from_history(
        system_instruction: impl Into<String>,
        history: &[Message],
        roles: &RoleMapping,
    ) -> Self {
        let turns = roles
            .map_history(history)
            .into_iter()
            .map(|(role, text)| ModelTurn {
                role: role.to_string(),
                text: text.to_string(),
            })
            .collect();

        Self {
            system_instruction: system_instruction.into(),
            turns,
        }
    }
}

/// Gateway for model communication
///
/// This port defines how the application layer talks to the hosted model.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Identifier of the model behind this gateway.
    fn model_name(&self) -> &str;

    /// Send the request and return the model's raw text answer.
    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GatewayError::Timeout.is_transient());
        assert!(GatewayError::RateLimited("429".into()).is_transient());
        assert!(
            GatewayError::ServerError {
                status: 503,
                message: "overloaded".into()
            }
            .is_transient()
        );
        assert!(GatewayError::ConnectionError("reset".into()).is_transient());

        assert!(
            !GatewayError::ApiError {
                status: 400,
                message: "bad".into()
            }
            .is_transient()
        );
        assert!(!GatewayError::InvalidResponse("no candidates".into()).is_transient());
        assert!(!GatewayError::Configuration("missing key".into()).is_transient());
    }

    #[test]
    fn test_request_from_history_maps_roles() {
        let history = vec![Message::user("hi"), Message::agent("hello")];
        let request = GenerateRequest::from_history("sys", &history, &RoleMapping::gemini());
        assert_eq!(request.system_instruction, "sys");
        assert_eq!(
            request.turns,
            vec![
                ModelTurn {
                    role: "user".into(),
                    text: "hi".into()
                },
                ModelTurn {
                    role: "model".into(),
                    text: "hello".into()
                },
            ]
        );
    }
}
