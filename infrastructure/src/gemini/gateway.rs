//! Gemini model gateway implementation

use super::error::GeminiError;
use super::protocol::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use autostream_application::{GatewayError, GenerateRequest, ModelGateway};
use std::time::Duration;
use tracing::{debug, info};

/// Connection settings for [`GeminiGateway`].
#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub model: String,
    pub base_url: String,
    /// `None` makes every call fail with a configuration error.
    pub api_key: Option<String>,
    /// Name of the variable the key was expected in, for error messages.
    pub api_key_env: String,
    pub connect_timeout: Duration,
}

/// Model gateway for Google's Generative Language API
///
/// One `generateContent` request per call, no retries of its own; wrap it
/// in a `RetryingGateway` (the turn processor does).
pub struct GeminiGateway {
    client: reqwest::Client,
    settings: GeminiSettings,
    endpoint: String,
}

impl GeminiGateway {
    pub fn new(settings: GeminiSettings) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(GeminiError::Client)?;
        let endpoint = format!(
            "{}/models/{}:generateContent",
            settings.base_url.trim_end_matches('/'),
            settings.model
        );

        info!(
            "GeminiGateway initialized (model: {}, key: {})",
            settings.model,
            if settings.api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );

        Ok(Self {
            client,
            settings,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(&self, request: &GenerateRequest) -> Result<String, GeminiError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| GeminiError::MissingApiKey(self.settings.api_key_env.clone()))?;

        let body = GenerateContentRequest::from(request);
        debug!(
            "POST {} ({} contents)",
            self.endpoint,
            body.contents.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(GeminiError::from_reqwest)?;

        let status = response.status();
        let text = response.text().await.map_err(GeminiError::from_reqwest)?;

        if !status.is_success() {
            return Err(GeminiError::from_status(status.as_u16(), &text));
        }

        let parsed: GenerateContentResponse =
            serde_json::from_str(&text).map_err(|e| GeminiError::Decode(e.to_string()))?;
        parsed.into_text().map_err(GeminiError::EmptyResponse)
    }
}

#[async_trait]
impl ModelGateway for GeminiGateway {
    fn model_name(&self) -> &str {
        &self.settings.model
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        self.call(request).await.map_err(GatewayError::from)
    }
}
