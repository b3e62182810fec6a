//! Facade over the remote chat-completion service

use axum::http::HeaderValue;
use tracing::{debug, warn};

use super::backend::CompletionBackend;
use super::prompts::PromptRequest;
use crate::config::Settings;
use crate::error::{Result, Web3AiError};

/// Credential-bound client for the remote generation service
pub struct Web3AiClient {
    model_name: String,
    backend: Box<dyn CompletionBackend>,
}

impl Web3AiClient {
    /// Create a client around any completion backend
    pub fn with_backend(
        model_name: impl Into<String>,
        backend: impl CompletionBackend + 'static,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            backend: Box::new(backend),
        }
    }

    /// Create a client for an OpenAI-compatible endpoint
    #[cfg(feature = "openai")]
    pub fn openai(settings: &Settings) -> Self {
        let backend = super::backend::OpenAiBackend::new(
            &settings.openai_api_key,
            &settings.openai_api_base,
        );
        Self::with_backend(&settings.model_name, backend)
    }

    /// Model name requests are sent to
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Send one request and map any failure onto `CallFailed`
    pub async fn generate(&self, request: &PromptRequest) -> Result<String> {
        debug!(
            kind = ?request.kind,
            model = %self.model_name,
            max_tokens = request.max_tokens,
            "Sending completion request"
        );

        match self.backend.complete(&self.model_name, request).await {
            Ok(text) => Ok(text),
            Err(e) => {
                warn!(kind = ?request.kind, "Completion request failed: {}", e);
                Err(Web3AiError::call_failed(request.kind, e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for Web3AiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Web3AiClient")
            .field("model_name", &self.model_name)
            .finish_non_exhaustive()
    }
}

/// Why a handle could not be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnconfiguredReason {
    /// API key empty or still the placeholder
    MissingApiKey,
    /// API key cannot be sent in an `Authorization` header
    InvalidApiKey,
    /// Built without the `openai` feature
    ProviderUnavailable,
}

/// A client that may or may not have been configured
#[derive(Debug)]
pub enum ClientHandle {
    Configured(Web3AiClient),
    Unconfigured(UnconfiguredReason),
}

impl ClientHandle {
    /// Build a handle from settings
    ///
    /// Never fails: a missing, placeholder or malformed API key, or a build
    /// without provider support, yields `Unconfigured` after logging a warning.
    pub fn setup(settings: &Settings) -> Self {
        if !settings.has_usable_api_key() {
            warn!("OpenAI API key not configured! Please set OPENAI_API_KEY in your .env file");
            return Self::Unconfigured(UnconfiguredReason::MissingApiKey);
        }

        let bearer = format!("Bearer {}", settings.openai_api_key.trim());
        if HeaderValue::from_str(&bearer).is_err() {
            warn!("OpenAI API key contains characters not allowed in an HTTP header");
            return Self::Unconfigured(UnconfiguredReason::InvalidApiKey);
        }

        Self::connect(settings)
    }

    #[cfg(feature = "openai")]
    fn connect(settings: &Settings) -> Self {
        let client = Web3AiClient::openai(settings);
        tracing::info!(
            model = %client.model_name(),
            api_base = %settings.openai_api_base,
            "OpenAI client initialized successfully"
        );
        Self::Configured(client)
    }

    #[cfg(not(feature = "openai"))]
    fn connect(_settings: &Settings) -> Self {
        warn!("OpenAI dependency missing: rebuild web3ai with the `openai` feature enabled");
        Self::Unconfigured(UnconfiguredReason::ProviderUnavailable)
    }

    /// Why the handle is unconfigured, if it is
    pub fn unconfigured_reason(&self) -> Option<UnconfiguredReason> {
        match self {
            Self::Configured(_) => None,
            Self::Unconfigured(reason) => Some(*reason),
        }
    }

    /// Whether the handle can issue requests
    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Configured(_))
    }

    /// Analyze smart contract code for vulnerabilities and best practices
    pub async fn analyze(&self, code: &str) -> Result<String> {
        self.generate(&PromptRequest::contract_analysis(code)).await
    }

    /// Explain a Web3 concept in simple terms
    pub async fn explain(&self, concept: &str) -> Result<String> {
        self.generate(&PromptRequest::concept_explanation(concept))
            .await
    }

    async fn generate(&self, request: &PromptRequest) -> Result<String> {
        match self {
            Self::Configured(client) => client.generate(request).await,
            Self::Unconfigured(_) => Err(Web3AiError::NotInitialized),
        }
    }
}

impl From<Web3AiClient> for ClientHandle {
    fn from(client: Web3AiClient) -> Self {
        Self::Configured(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::backend::BackendError;
    use crate::model::PromptKind;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records requests and replies with a fixed outcome
    struct StubBackend {
        reply: std::result::Result<String, String>,
        seen: Arc<Mutex<Vec<(String, PromptRequest)>>>,
    }

    #[async_trait]
    impl CompletionBackend for StubBackend {
        async fn complete(
            &self,
            model: &str,
            request: &PromptRequest,
        ) -> std::result::Result<String, BackendError> {
            self.seen
                .lock()
                .unwrap()
                .push((model.to_string(), request.clone()));
            self.reply.clone().map_err(Into::into)
        }
    }

    fn stub_handle(
        reply: std::result::Result<&str, &str>,
    ) -> (ClientHandle, Arc<Mutex<Vec<(String, PromptRequest)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let backend = StubBackend {
            reply: reply.map(str::to_string).map_err(str::to_string),
            seen: seen.clone(),
        };
        let handle = Web3AiClient::with_backend("test-model", backend).into();
        (handle, seen)
    }

    #[test]
    fn test_setup_without_key_is_unconfigured() {
        let handle = ClientHandle::setup(&Settings::default());
        assert!(!handle.is_configured());
        assert_eq!(
            handle.unconfigured_reason(),
            Some(UnconfiguredReason::MissingApiKey)
        );
    }

    #[test]
    fn test_setup_with_placeholder_is_unconfigured() {
        let settings =
            Settings::from_pairs([("OPENAI_API_KEY", crate::config::API_KEY_PLACEHOLDER)]);
        assert_eq!(
            ClientHandle::setup(&settings).unconfigured_reason(),
            Some(UnconfiguredReason::MissingApiKey)
        );
    }

    #[test]
    fn test_setup_rejects_key_with_control_characters() {
        for key in ["sk-te\nst", "sk-\u{1}test", "sk-test\u{7f}"] {
            let settings = Settings::from_pairs([("OPENAI_API_KEY", key)]);
            assert_eq!(
                ClientHandle::setup(&settings).unconfigured_reason(),
                Some(UnconfiguredReason::InvalidApiKey),
                "key {:?} should be rejected",
                key
            );
        }
    }

    #[cfg(feature = "openai")]
    #[test]
    fn test_setup_trims_surrounding_whitespace() {
        let settings = Settings::from_pairs([("OPENAI_API_KEY", " sk-test\n")]);
        assert!(ClientHandle::setup(&settings).is_configured());
    }

    #[cfg(not(feature = "openai"))]
    #[test]
    fn test_setup_without_provider_is_unconfigured() {
        let settings = Settings::from_pairs([("OPENAI_API_KEY", "sk-test")]);
        assert!(settings.has_usable_api_key());
        assert_eq!(
            ClientHandle::setup(&settings).unconfigured_reason(),
            Some(UnconfiguredReason::ProviderUnavailable)
        );
    }

    #[cfg(feature = "openai")]
    #[test]
    fn test_setup_with_key_is_configured() {
        let settings = Settings::from_pairs([("OPENAI_API_KEY", "sk-test"), ("MODEL_NAME", "m")]);
        match ClientHandle::setup(&settings) {
            ClientHandle::Configured(client) => assert_eq!(client.model_name(), "m"),
            ClientHandle::Unconfigured(reason) => panic!("expected a configured handle: {:?}", reason),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_returns_not_initialized() {
        let handle = ClientHandle::Unconfigured(UnconfiguredReason::MissingApiKey);
        for input in ["", "contract X {}", "What is gas?"] {
            let err = handle.analyze(input).await.unwrap_err();
            assert_eq!(err.to_string(), "Client not initialized");
            let err = handle.explain(input).await.unwrap_err();
            assert_eq!(err.to_string(), "Client not initialized");
        }
    }

    #[tokio::test]
    async fn test_success_is_returned_verbatim() {
        let (handle, seen) = stub_handle(Ok("  Gas is a fee.\n"));
        let text = handle.explain("What is gas?").await.unwrap();
        assert_eq!(text, "  Gas is a fee.\n");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "test-model");
        assert_eq!(seen[0].1.kind, PromptKind::ConceptExplanation);
        assert_eq!(seen[0].1.user_prompt, "Explain: What is gas?");
    }

    #[tokio::test]
    async fn test_failure_is_classified() {
        let (handle, seen) = stub_handle(Err("connection reset by peer"));
        let err = handle.analyze("contract X {}").await.unwrap_err();
        assert!(matches!(
            err,
            Web3AiError::CallFailed {
                kind: PromptKind::ContractAnalysis,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "Error analyzing contract: connection reset by peer"
        );
        // exactly one attempt, no retry
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}
