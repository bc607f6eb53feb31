use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequest,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;

use crate::{
    config::ProviderConfig,
    error::{CodepixError, Result},
    llm::provider::{CompletionBackend, ProviderId},
};

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

// Sampling parameters sent with every Groq completion.
pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 1.0;
pub const MAX_TOKENS: u32 = 2048;

/// Client for Groq's OpenAI-compatible chat completions API.
#[derive(Clone)]
pub struct GroqClient {
    client: Client<OpenAIConfig>,
    base_url: String,
}

impl GroqClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.api_key.clone().ok_or(CodepixError::ProviderUnavailable {
            provider: ProviderId::Groq,
        })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| GROQ_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let openai_config = OpenAIConfig::new()
            .with_api_base(base_url.clone())
            .with_api_key(api_key);

        // async-openai retries 429/5xx on its own; a zero elapsed limit turns
        // that off so each completion is a single outbound call.
        let backoff = backoff::ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };

        let client = Client::with_config(openai_config).with_backoff(backoff);

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_request(prompt: &str, model: &str) -> Result<CreateChatCompletionRequest> {
        let messages = vec![ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|error| CodepixError::Internal(format!("Invalid user prompt: {error}")))?
            .into()];

        let mut request = CreateChatCompletionRequestArgs::default();
        #[allow(deprecated)]
        request
            .model(model)
            .messages(messages)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .top_p(TOP_P);

        request.build().map_err(|error| {
            CodepixError::Internal(format!("Invalid Groq completion request: {error}"))
        })
    }

    fn extract_content(response: CreateChatCompletionResponse) -> Result<String> {
        let message = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                CodepixError::provider_call(ProviderId::Groq, "Groq response contained no choices")
            })?
            .message
            .content
            .unwrap_or_default();

        if message.trim().is_empty() {
            return Err(CodepixError::provider_call(
                ProviderId::Groq,
                "Groq response contained empty content",
            ));
        }

        Ok(message)
    }

    fn map_openai_error(error: OpenAIError) -> CodepixError {
        let message = match error {
            OpenAIError::ApiError(api_error) => api_error.message,
            OpenAIError::Reqwest(reqwest_error) => format!("Groq request failed: {reqwest_error}"),
            OpenAIError::JSONDeserialize(err) => format!("Failed to parse Groq response: {err}"),
            other => other.to_string(),
        };
        CodepixError::provider_call(ProviderId::Groq, message)
    }
}

#[async_trait]
impl CompletionBackend for GroqClient {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String> {
        let request = Self::build_request(prompt, model)?;

        match self.client.chat().create(request).await {
            Ok(response) => Self::extract_content(response),
            Err(error) => Err(Self::map_openai_error(error)),
        }
    }
}
