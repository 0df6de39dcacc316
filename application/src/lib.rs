//! Application layer for autostream-agent
//!
//! This crate contains use cases, port definitions, the retry wrapper and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod retry;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, RetryPolicy};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    lead_capture::{LeadCapturePort, NoLeadCapture},
    llm_gateway::{GatewayError, GenerateRequest, ModelGateway, ModelTurn},
};
pub use retry::RetryingGateway;
pub use use_cases::handle_message::{HandleMessageError, HandleMessageUseCase, TurnOutcome};
pub use use_cases::process_turn::ProcessTurnUseCase;
