//! Process Turn use case.
//!
//! The turn processor: session history in, [`TurnResult`] out.
//!
//! 1. Build the system instruction embedding the knowledge base
//! 2. Map history roles to the provider's vocabulary
//! 3. Call the model through the [`RetryingGateway`]
//! 4. Parse intent and reply from the raw text
//!
//! Failures never escape: after retries are exhausted the result degrades
//! to [`TurnResult::system_error`].

use crate::config::{BehaviorConfig, RetryPolicy};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GenerateRequest, ModelGateway};
use crate::retry::RetryingGateway;
use autostream_domain::util::log_preview;
use autostream_domain::{
    AgentPromptTemplate, KnowledgeBase, Message, RoleMapping, TurnResult, parse_model_output,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for processing a single conversational turn.
pub struct ProcessTurnUseCase {
    gateway: RetryingGateway,
    knowledge: Arc<KnowledgeBase>,
    roles: RoleMapping,
    system_instruction: String,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ProcessTurnUseCase {
    /// Create with the default [`RetryPolicy`] and Gemini role labels.
    pub fn new(gateway: Arc<dyn ModelGateway>, knowledge: Arc<KnowledgeBase>) -> Self {
        let system_instruction = AgentPromptTemplate::system_instruction(&knowledge);
        Self {
            gateway: RetryingGateway::new(gateway, RetryPolicy::default()),
            knowledge,
            roles: RoleMapping::default(),
            system_instruction,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.gateway = self.gateway.with_policy(policy);
        self
    }

    pub fn with_behavior(mut self, behavior: &BehaviorConfig) -> Self {
        self.gateway = self.gateway.with_behavior(behavior);
        self
    }

    pub fn with_role_mapping(mut self, roles: RoleMapping) -> Self {
        self.roles = roles;
        self
    }

    /// Create with a conversation logger (shared with the retry wrapper).
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.gateway = self.gateway.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn model_name(&self) -> &str {
        self.gateway.model_name()
    }

    /// Request sent to the model for `history`.
    pub fn build_request(&self, history: &[Message]) -> GenerateRequest {
        GenerateRequest::from_history(self.system_instruction.clone(), history, &self.roles)
    }

    /// Run one turn over the full history.
    pub async fn process(&self, history: &[Message]) -> TurnResult {
        let request = self.build_request(history);
        debug!(
            "Processing turn: {} messages, model {}",
            request.turns.len(),
            self.gateway.model_name()
        );

        let raw = match self.gateway.generate(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Turn failed: {}", e);
                let result = TurnResult::system_error(&e);
                self.log_result(&result);
                return result;
            }
        };

        self.conversation_logger.log(ConversationEvent::model_response(
            self.gateway.model_name(),
            &raw,
        ));

        let result = parse_model_output(&raw);
        info!(
            "Turn complete: intent={}, reply=\"{}\"",
            result.intent,
            log_preview(&result.reply, 80)
        );
        self.log_result(&result);
        result
    }

    fn log_result(&self, result: &TurnResult) {
        self.conversation_logger
            .log(ConversationEvent::turn_result(result));
    }
}
