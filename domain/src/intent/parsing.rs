//! Model output parsing.
//!
//! The model is asked to answer in the shape
//!
//! ```text
//! Intent: <Greeting|Inquiry|High-Intent>
//! Response: <message>
//! ```
//!
//! but nothing enforces it. Parsing is best-effort text matching: no I/O,
//! no failure mode, the same input always yields the same [`TurnResult`].

use super::entities::{Intent, TurnResult};

/// Marker preceding the user-facing reply.
pub const RESPONSE_MARKER: &str = "Response:";

const INTENT_PREFIX: &str = "Intent: ";

/// Parse raw model text into a [`TurnResult`].
///
/// - Intent: each label in [`Intent::CLASSIFIED`] is checked for an
///   `Intent: <label>` substring; the last label found wins, none found
///   gives [`Intent::Unknown`].
/// - Reply: everything after the last `Response:` marker, trimmed. Without a
///   marker the whole text is the reply.
///
/// # Examples
///
/// ```
/// use autostream_domain::{Intent, parse_model_output};
///
/// let result = parse_model_output("Intent: Inquiry\nResponse: Our Pro plan is $79/month.");
/// assert_eq!(result.intent, Intent::Inquiry);
/// assert_eq!(result.reply, "Our Pro plan is $79/month.");
/// ```
pub fn parse_model_output(raw: &str) -> TurnResult {
    TurnResult::new(extract_reply(raw), detect_intent(raw))
}

/// Intent label announced by the model, or [`Intent::Unknown`].
pub fn detect_intent(raw: &str) -> Intent {
    Intent::CLASSIFIED
        .iter()
        .rev()
        .find(|intent| raw.contains(&format!("{}{}", INTENT_PREFIX, intent.as_str())))
        .copied()
        .unwrap_or_default()
}

/// Reply body: text after the last [`RESPONSE_MARKER`], trimmed.
pub fn extract_reply(raw: &str) -> &str {
    match raw.rfind(RESPONSE_MARKER) {
        Some(pos) => raw[pos + RESPONSE_MARKER.len()..].trim(),
        None => raw.trim(),
    }
}
