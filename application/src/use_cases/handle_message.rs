//! Handle Message use case.
//!
//! One conversation step for a session: record the user's message, run the
//! turn processor over the whole history, record the reply, and fire the
//! lead capture when the reply carries a complete lead.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::lead_capture::LeadCapturePort;
use crate::use_cases::process_turn::ProcessTurnUseCase;
use autostream_domain::{Lead, Message, SessionId, SessionRepository, TurnResult, detect_lead};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while handling a message.
///
/// Model failures are not errors here; they come back as a degraded
/// [`TurnResult`]. Only the session store can fail a step.
#[derive(Error, Debug)]
pub enum HandleMessageError {
    #[error("Session store error: {0}")]
    SessionStore(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl HandleMessageError {
    fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        HandleMessageError::SessionStore(Box::new(e))
    }
}

/// Result of one conversation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub result: TurnResult,
    /// Lead handed to the capture port during this step, if any.
    pub lead: Option<Lead>,
}

impl TurnOutcome {
    pub fn lead_captured(&self) -> bool {
        self.lead.is_some()
    }
}

/// Use case for handling one user message within a session.
pub struct HandleMessageUseCase<R: SessionRepository> {
    turn: ProcessTurnUseCase,
    sessions: Arc<R>,
    lead_capture: Arc<dyn LeadCapturePort>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<R: SessionRepository> HandleMessageUseCase<R> {
    pub fn new(
        turn: ProcessTurnUseCase,
        sessions: Arc<R>,
        lead_capture: Arc<dyn LeadCapturePort>,
    ) -> Self {
        Self {
            turn,
            sessions,
            lead_capture,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn turn_processor(&self) -> &ProcessTurnUseCase {
        &self.turn
    }

    /// Handle one user message.
    pub async fn handle(
        &self,
        session: &SessionId,
        text: &str,
    ) -> Result<TurnOutcome, HandleMessageError> {
        self.sessions
            .append(session, Message::user(text))
            .await
            .map_err(HandleMessageError::store)?;
        self.conversation_logger
            .log(ConversationEvent::user_message(session, text));

        let history = self
            .sessions
            .history(session)
            .await
            .map_err(HandleMessageError::store)?;

        let result = self.turn.process(&history).await;

        self.sessions
            .append(session, Message::agent(result.reply.clone()))
            .await
            .map_err(HandleMessageError::store)?;

        let lead = detect_lead(&result.reply);
        if let Some(lead) = &lead {
            info!("Lead complete for session {}: {}", session, lead);
            self.lead_capture.capture(lead);
            self.conversation_logger
                .log(ConversationEvent::lead_captured(session, lead));
        } else if result.intent.is_high_intent() {
            debug!(
                "High-intent turn for session {}, lead details still incomplete",
                session
            );
        }

        Ok(TurnOutcome { result, lead })
    }

    /// Messages recorded for a session so far.
    pub async fn history(&self, session: &SessionId) -> Result<Vec<Message>, HandleMessageError> {
        self.sessions
            .history(session)
            .await
            .map_err(HandleMessageError::store)
    }

    /// Forget a session's history. Returns whether anything was stored.
    pub async fn reset(&self, session: &SessionId) -> Result<bool, HandleMessageError> {
        let existed = self
            .sessions
            .clear(session)
            .await
            .map_err(HandleMessageError::store)?;
        info!("Session {} reset (existed: {})", session, existed);
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::ports::lead_capture::NoLeadCapture;
    use crate::ports::llm_gateway::GatewayError;
    use crate::retry::tests::{ScriptedGateway, unavailable};
    use async_trait::async_trait;
    use autostream_domain::{Intent, KnowledgeBase, Role};
    use std::collections::HashMap;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct MemorySessions {
        sessions: Mutex<HashMap<SessionId, Vec<Message>>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct StoreOffline;

    #[async_trait]
    impl SessionRepository for MemorySessions {
        type Error = StoreOffline;

        async fn history(&self, id: &SessionId) -> Result<Vec<Message>, Self::Error> {
            Ok(self
                .sessions
                .lock()
                .unwrap()
                .get(id)
                .cloned()
                .unwrap_or_default())
        }

        async fn append(&self, id: &SessionId, message: Message) -> Result<(), Self::Error> {
            self.sessions
                .lock()
                .unwrap()
                .entry(id.clone())
                .or_default()
                .push(message);
            Ok(())
        }

        async fn clear(&self, id: &SessionId) -> Result<bool, Self::Error> {
            Ok(self.sessions.lock().unwrap().remove(id).is_some())
        }
    }

    struct OfflineSessions;

    #[async_trait]
    impl SessionRepository for OfflineSessions {
        type Error = StoreOffline;

        async fn history(&self, _id: &SessionId) -> Result<Vec<Message>, Self::Error> {
            Err(StoreOffline)
        }

        async fn append(&self, _id: &SessionId, _message: Message) -> Result<(), Self::Error> {
            Err(StoreOffline)
        }

        async fn clear(&self, _id: &SessionId) -> Result<bool, Self::Error> {
            Err(StoreOffline)
        }
    }

    #[derive(Default)]
    struct RecordingCapture {
        leads: Mutex<Vec<Lead>>,
    }

    impl LeadCapturePort for RecordingCapture {
        fn capture(&self, lead: &Lead) {
            self.leads.lock().unwrap().push(lead.clone());
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<ConversationEvent>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn turn(responses: Vec<Result<String, GatewayError>>) -> ProcessTurnUseCase {
        ProcessTurnUseCase::new(
            Arc::new(ScriptedGateway::new(responses)),
            Arc::new(KnowledgeBase::autostream()),
        )
        .with_retry_policy(RetryPolicy::immediate(5))
    }

    fn session(id: &str) -> SessionId {
        SessionId::new(id).unwrap()
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_history_grows_by_two_per_turn() {
        let sessions = Arc::new(MemorySessions::default());
        let use_case = HandleMessageUseCase::new(
            turn(vec![
                Ok("Intent: Greeting\nResponse: Hi there!".to_string()),
                Ok("Intent: Inquiry\nResponse: Basic is $29/month.".to_string()),
            ]),
            sessions.clone(),
            Arc::new(NoLeadCapture),
        );
        let id = session("s1");

        let first = use_case.handle(&id, "hello").await.unwrap();
        assert_eq!(first.result.intent, Intent::Greeting);
        let second = use_case.handle(&id, "basic price?").await.unwrap();
        assert_eq!(second.result.reply, "Basic is $29/month.");

        let history = use_case.history(&id).await.unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[1], Message::agent("Hi there!"));
        assert_eq!(history[3].role, Role::Agent);
    }

    #[tokio::test]
    async fn test_lead_capture_fires_once_with_fields() {
        let capture = Arc::new(RecordingCapture::default());
        let use_case = HandleMessageUseCase::new(
            turn(vec![Ok(
                "Intent: High-Intent\nResponse: You're all set!\nLEAD_COMPLETE: Jane Doe, jane@x.com, YouTube"
                    .to_string(),
            )]),
            Arc::new(MemorySessions::default()),
            capture.clone(),
        );

        let outcome = use_case.handle(&session("s1"), "YouTube").await.unwrap();

        assert!(outcome.lead_captured());
        let leads = capture.leads.lock().unwrap();
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0], Lead::new("Jane Doe", "jane@x.com", "YouTube"));
    }

    #[tokio::test]
    async fn test_incomplete_lead_is_ignored() {
        let capture = Arc::new(RecordingCapture::default());
        let use_case = HandleMessageUseCase::new(
            turn(vec![Ok(
                "Intent: High-Intent\nResponse: LEAD_COMPLETE: Jane".to_string(),
            )]),
            Arc::new(MemorySessions::default()),
            capture.clone(),
        );

        let outcome = use_case.handle(&session("s1"), "I'm Jane").await.unwrap();

        assert!(!outcome.lead_captured());
        assert!(capture.leads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_model_failure_is_recorded_as_reply() {
        let use_case = HandleMessageUseCase::new(
            turn((0..5).map(|_| Err(unavailable())).collect()),
            Arc::new(MemorySessions::default()),
            Arc::new(NoLeadCapture),
        );
        let id = session("s1");

        let outcome = use_case.handle(&id, "hello").await.unwrap();
        assert!(outcome.result.is_system_error());

        let history = use_case.history(&id).await.unwrap();
        assert!(history[1].content.starts_with("System error:"));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let use_case = HandleMessageUseCase::new(
            turn(vec![
                Ok("Response: a".to_string()),
                Ok("Response: b".to_string()),
            ]),
            Arc::new(MemorySessions::default()),
            Arc::new(NoLeadCapture),
        );

        use_case.handle(&session("alice"), "hi").await.unwrap();
        use_case.handle(&session("bob"), "yo").await.unwrap();

        let alice = use_case.history(&session("alice")).await.unwrap();
        assert_eq!(alice, vec![Message::user("hi"), Message::agent("a")]);
        assert!(use_case.reset(&session("bob")).await.unwrap());
        assert!(use_case.history(&session("bob")).await.unwrap().is_empty());
        assert!(!use_case.reset(&session("carol")).await.unwrap());
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let use_case = HandleMessageUseCase::new(
            turn(vec![]),
            Arc::new(OfflineSessions),
            Arc::new(NoLeadCapture),
        );

        let err = use_case.handle(&session("s1"), "hi").await.unwrap_err();
        assert_eq!(err.to_string(), "Session store error: store offline");
    }

    #[tokio::test]
    async fn test_transcript_records_turn_in_order() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = HandleMessageUseCase::new(
            turn(vec![Ok(
                "Intent: High-Intent\nResponse: Done!\nLEAD_COMPLETE: Jane Doe, jane@x.com, YouTube"
                    .to_string(),
            )]),
            Arc::new(MemorySessions::default()),
            Arc::new(NoLeadCapture),
        )
        .with_conversation_logger(logger.clone());
        let id = session("s1");

        use_case.handle(&id, "YouTube").await.unwrap();

        let events = logger.events.lock().unwrap();
        let types: Vec<&str> = events.iter().map(|e| e.event_type).collect();
        assert_eq!(types, vec!["user_message", "lead_captured"]);
        assert_eq!(events[0], ConversationEvent::user_message(&id, "YouTube"));
        assert_eq!(
            events[1],
            ConversationEvent::lead_captured(&id, &Lead::new("Jane Doe", "jane@x.com", "YouTube"))
        );
    }

    #[tokio::test]
    async fn test_high_intent_without_lead_captures_nothing() {
        let capture = Arc::new(RecordingCapture::default());
        let use_case = HandleMessageUseCase::new(
            turn(vec![Ok(
                "Intent: High-Intent\nResponse: Great! What's your name?".to_string(),
            )]),
            Arc::new(MemorySessions::default()),
            capture.clone(),
        );

        let outcome = use_case.handle(&session("s1"), "sign me up").await.unwrap();

        assert!(outcome.result.intent.is_high_intent());
        assert!(!outcome.lead_captured());
        assert!(capture.leads.lock().unwrap().is_empty());
    }
}
