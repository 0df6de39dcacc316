//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording conversation events
//! to a machine-readable transcript (JSONL in the infrastructure adapter).
//! Events are built through the typed constructors on [`ConversationEvent`],
//! so every call site writes the same field names for the same event.
//!
//! Diagnostic messages stay on `tracing`; this port only sees transcript data.

use autostream_domain::{Lead, SessionId, TurnResult};
use serde_json::{Value, json};
use std::fmt::Display;
use std::time::Duration;

/// A structured conversation event for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    /// Event type identifier, written as the `type` field.
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }

    /// A message typed by the user, before the model sees it.
    pub fn user_message(session: &SessionId, text: &str) -> Self {
        Self::new(
            "user_message",
            json!({
                "session": session.as_str(),
                "text": text,
            }),
        )
    }

    /// Raw model output, before parsing.
    pub fn model_response(model: &str, raw: &str) -> Self {
        Self::new(
            "model_response",
            json!({
                "model": model,
                "bytes": raw.len(),
                "text": raw,
            }),
        )
    }

    /// Parsed outcome of a turn.
    pub fn turn_result(result: &TurnResult) -> Self {
        Self::new(
            "turn_result",
            json!({
                "intent": result.intent.as_str(),
                "reply": result.reply,
            }),
        )
    }

    /// A transient model failure about to be retried after `delay`.
    pub fn retry(
        model: &str,
        attempt: u32,
        max_attempts: u32,
        delay: Duration,
        error: &impl Display,
    ) -> Self {
        Self::new(
            "retry",
            json!({
                "model": model,
                "attempt": attempt,
                "max_attempts": max_attempts,
                "delay_ms": u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "error": error.to_string(),
            }),
        )
    }

    /// A complete lead handed to the capture port.
    pub fn lead_captured(session: &SessionId, lead: &Lead) -> Self {
        Self::new(
            "lead_captured",
            json!({
                "session": session.as_str(),
                "name": lead.name,
                "email": lead.email,
                "platform": lead.platform,
            }),
        )
    }
}

/// Port for logging conversation events to a structured log.
///
/// The `log` method is synchronous and infallible; logging failures are
/// dropped so they never disturb a turn.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
