//! Completion backends: the seam between the facade and a remote provider

use async_trait::async_trait;

use super::prompts::PromptRequest;

/// Boxed provider error; only its text is surfaced to callers
pub type BackendError = Box<dyn std::error::Error + Send + Sync>;

/// A remote text-generation service
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Issue one request and return the first completion's text
    async fn complete(&self, model: &str, request: &PromptRequest) -> Result<String, BackendError>;
}

#[cfg(feature = "openai")]
pub use openai::OpenAiBackend;

#[cfg(feature = "openai")]
mod openai {
    use async_openai::{
        config::OpenAIConfig,
        types::{
            ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
            CreateChatCompletionRequestArgs,
        },
        Client,
    };
    use async_trait::async_trait;
    use backoff::ExponentialBackoffBuilder;
    use std::time::Duration;
    use tracing::debug;

    use super::{BackendError, CompletionBackend};
    use crate::model::prompts::PromptRequest;

    /// OpenAI-compatible chat-completions backend
    pub struct OpenAiBackend {
        client: Client<OpenAIConfig>,
    }

    impl OpenAiBackend {
        /// Create a backend bound to an API key and base URL
        ///
        /// Requests are attempted exactly once: the client's built-in
        /// backoff is given a zero time budget, so rate-limit and server
        /// errors come straight back to the caller.
        pub fn new(api_key: &str, api_base: &str) -> Self {
            let openai_config = OpenAIConfig::new()
                .with_api_base(api_base)
                .with_api_key(api_key.trim());

            let no_retry = ExponentialBackoffBuilder::new()
                .with_max_elapsed_time(Some(Duration::ZERO))
                .build();

            Self {
                client: Client::with_config(openai_config).with_backoff(no_retry),
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for OpenAiBackend {
        async fn complete(
            &self,
            model: &str,
            request: &PromptRequest,
        ) -> Result<String, BackendError> {
            let chat_request = CreateChatCompletionRequestArgs::default()
                .model(model)
                .max_tokens(request.max_tokens)
                .temperature(request.temperature)
                .messages(vec![
                    ChatCompletionRequestSystemMessageArgs::default()
                        .content(request.system_prompt.as_str())
                        .build()?
                        .into(),
                    ChatCompletionRequestUserMessageArgs::default()
                        .content(request.user_prompt.as_str())
                        .build()?
                        .into(),
                ])
                .build()?;

            let response = self.client.chat().create(chat_request).await?;
            debug!(
                choices = response.choices.len(),
                model = %response.model,
                "Received chat completion"
            );

            let first = response
                .choices
                .into_iter()
                .next()
                .ok_or("Received empty response from API")?;

            first
                .message
                .content
                .ok_or_else(|| "Completion contained no text content".into())
        }
    }
}
