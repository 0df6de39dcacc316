//! Wire types for the Gemini `generateContent` endpoint

use autostream_application::GenerateRequest;
use serde::{Deserialize, Serialize};

/// Request body for `POST models/{model}:generateContent`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
}

impl From<&GenerateRequest> for GenerateContentRequest {
    fn from(request: &GenerateRequest) -> Self {
        let system_instruction = (!request.system_instruction.is_empty()).then(|| Content {
            role: None,
            parts: vec![Part::text(&request.system_instruction)],
        });
        let contents = request
            .turns
            .iter()
            .map(|turn| Content {
                role: Some(turn.role.clone()),
                parts: vec![Part::text(&turn.text)],
            })
            .collect();
        Self {
            system_instruction,
            contents,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Set on reasoning parts from thinking models.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub thought: bool,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            thought: false,
        }
    }
}

/// Response body of `generateContent`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Visible text of the first candidate, or why there is none.
    ///
    /// Thought parts are skipped; the remaining text parts are concatenated.
    pub fn into_text(self) -> Result<String, String> {
        if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(format!("prompt blocked: {}", reason));
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err("no candidates in response".to_string());
        };

        let text: String = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|p| !p.thought)
            .filter_map(|p| p.text)
            .collect();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.as_deref().unwrap_or("UNKNOWN");
            return Err(format!("empty response (finishReason={})", reason));
        }
        Ok(text)
    }
}

/// Error envelope returned by Google APIs
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub message: String,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use autostream_application::ModelTurn;

    #[test]
    fn test_request_serialization() {
        let request = GenerateRequest {
            system_instruction: "You are helpful.".to_string(),
            turns: vec![
                ModelTurn {
                    role: "user".to_string(),
                    text: "hi".to_string(),
                },
                ModelTurn {
                    role: "model".to_string(),
                    text: "Hello!".to_string(),
                },
            ],
        };
        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "systemInstruction": {"parts": [{"text": "You are helpful."}]},
                "contents": [
                    {"role": "user", "parts": [{"text": "hi"}]},
                    {"role": "model", "parts": [{"text": "Hello!"}]}
                ]
            })
        );
    }

    #[test]
    fn test_empty_instruction_is_omitted() {
        let request = GenerateRequest {
            system_instruction: String::new(),
            turns: vec![],
        };
        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_text_skips_thought_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "role": "model",
                        "parts": [
                            {"text": "thinking about plans...", "thought": true},
                            {"text": "Intent: Inquiry\n"},
                            {"text": "Response: Pro is $79/month."}
                        ]
                    },
                    "finishReason": "STOP"
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(
            response.into_text().unwrap(),
            "Intent: Inquiry\nResponse: Pro is $79/month."
        );
    }

    #[test]
    fn test_blocked_prompt() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert_eq!(response.into_text().unwrap_err(), "prompt blocked: SAFETY");
    }

    #[test]
    fn test_empty_candidate_reports_finish_reason() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": []}, "finishReason": "MAX_TOKENS"}]}"#,
        )
        .unwrap();
        assert!(
            response
                .into_text()
                .unwrap_err()
                .contains("finishReason=MAX_TOKENS")
        );
    }

    #[test]
    fn test_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_text().is_err());
    }
}
