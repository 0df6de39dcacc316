//! Retrying model gateway.
//!
//! [`RetryingGateway`] decorates any [`ModelGateway`] with the
//! [`RetryPolicy`]: transient failures are retried after a randomized
//! exponential backoff, permanent failures and the last transient failure
//! are returned unchanged. Call sites never special-case retries.

use crate::config::{BehaviorConfig, RetryPolicy};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, GenerateRequest, ModelGateway};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// [`ModelGateway`] decorator applying a [`RetryPolicy`] and per-call timeout.
pub struct RetryingGateway {
    inner: Arc<dyn ModelGateway>,
    policy: RetryPolicy,
    attempt_timeout: Option<Duration>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RetryingGateway {
    pub fn new(inner: Arc<dyn ModelGateway>, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            attempt_timeout: None,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Bound every attempt by the behavior config's timeout.
    pub fn with_behavior(mut self, behavior: &BehaviorConfig) -> Self {
        self.attempt_timeout = behavior.timeout;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    async fn attempt(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        match self.attempt_timeout {
            Some(limit) => tokio::time::timeout(limit, self.inner.generate(request))
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => self.inner.generate(request).await,
        }
    }
}

#[async_trait]
impl ModelGateway for RetryingGateway {
    fn model_name(&self) -> &str {
        self.inner.model_name()
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
        let max_attempts = self.policy.attempts();
        let mut attempt = 1;

        loop {
            debug!(
                model = self.inner.model_name(),
                attempt, max_attempts, "Calling model"
            );

            let error = match self.attempt(request).await {
                Ok(text) => return Ok(text),
                Err(e) => e,
            };

            if !error.is_transient() {
                warn!("Model call failed with permanent error: {}", error);
                return Err(error);
            }

            if attempt >= max_attempts {
                warn!(
                    "Model call failed after {} attempts: {}",
                    max_attempts, error
                );
                return Err(error);
            }

            let delay = self.policy.delay_for(attempt - 1);
            warn!(
                "Transient model failure (attempt {}/{}), retrying in {}ms: {}",
                attempt,
                max_attempts,
                delay.as_millis(),
                error
            );
            self.conversation_logger.log(ConversationEvent::retry(
                self.inner.model_name(),
                attempt,
                max_attempts,
                delay,
                &error,
            ));

            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    /// Gateway replaying a scripted sequence of results and counting calls.
    pub(crate) struct ScriptedGateway {
        responses: Mutex<VecDeque<Result<String, GatewayError>>>,
        calls: AtomicUsize,
        requests: Mutex<Vec<GenerateRequest>>,
    }

    impl ScriptedGateway {
        pub(crate) fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
            Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: AtomicUsize::new(0),
                requests: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub(crate) fn last_request(&self) -> Option<GenerateRequest> {
            self.requests.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl ModelGateway for ScriptedGateway {
        fn model_name(&self) -> &str {
            "scripted-model"
        }

        async fn generate(&self, request: &GenerateRequest) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more responses".to_string())))
        }
    }

    /// Gateway that never answers.
    struct HangingGateway;

    #[async_trait]
    impl ModelGateway for HangingGateway {
        fn model_name(&self) -> &str {
            "hanging-model"
        }

        async fn generate(&self, _request: &GenerateRequest) -> Result<String, GatewayError> {
            std::future::pending().await
        }
    }

    pub(crate) fn unavailable() -> GatewayError {
        GatewayError::ServerError {
            status: 503,
            message: "The model is overloaded".to_string(),
        }
    }

    fn request() -> GenerateRequest {
        GenerateRequest {
            system_instruction: "sys".to_string(),
            turns: vec![],
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let inner = Arc::new(ScriptedGateway::new(vec![Ok("hello".to_string())]));
        let gateway = RetryingGateway::new(inner.clone(), RetryPolicy::immediate(5));

        assert_eq!(gateway.generate(&request()).await.unwrap(), "hello");
        assert_eq!(inner.calls(), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let inner = Arc::new(ScriptedGateway::new(vec![
            Err(unavailable()),
            Err(GatewayError::RateLimited("quota".to_string())),
            Ok("finally".to_string()),
        ]));
        let gateway = RetryingGateway::new(inner.clone(), RetryPolicy::immediate(5));

        assert_eq!(gateway.generate(&request()).await.unwrap(), "finally");
        assert_eq!(inner.calls(), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_attempts() {
        let inner = Arc::new(ScriptedGateway::new(
            (0..10).map(|_| Err(unavailable())).collect(),
        ));
        let gateway = RetryingGateway::new(inner.clone(), RetryPolicy::immediate(5));

        let err = gateway.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ServerError { status: 503, .. }));
        assert_eq!(inner.calls(), 5);
    }

    #[tokio::test]
    async fn test_permanent_error_is_not_retried() {
        let inner = Arc::new(ScriptedGateway::new(vec![
            Err(GatewayError::ApiError {
                status: 400,
                message: "bad request".to_string(),
            }),
            Ok("unreachable".to_string()),
        ]));
        let gateway = RetryingGateway::new(inner.clone(), RetryPolicy::immediate(5));

        assert!(gateway.generate(&request()).await.is_err());
        assert_eq!(inner.calls(), 1);
    }

    #[tokio::test]
    async fn test_attempt_timeout_is_transient() {
        let gateway = RetryingGateway::new(Arc::new(HangingGateway), RetryPolicy::immediate(2))
            .with_behavior(&BehaviorConfig {
                timeout: Some(Duration::from_millis(10)),
            });

        let err = gateway.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
    }
}
