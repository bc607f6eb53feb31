//! Provider gateway: one `complete` call over every registered backend.
//!
//! Providers are kept in a table keyed by [`ProviderId`]. A provider whose
//! credential was missing at startup stays in the table without a backend so
//! that requests routed to it fail with a precise error instead of an
//! "unsupported" one.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::error::{CodepixError, Result};
use crate::llm::gemini::GeminiClient;
use crate::llm::groq::GroqClient;
use crate::llm::provider::{CompletionBackend, CompletionRequest, CompletionResult, ProviderId};

struct ProviderEntry {
    backend: Option<Arc<dyn CompletionBackend>>,
    default_model: String,
}

/// Availability snapshot used by the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderStatus {
    pub provider: ProviderId,
    pub available: bool,
    pub default_model: String,
}

#[derive(Default)]
pub struct Gateway {
    providers: HashMap<ProviderId, ProviderEntry>,
}

impl Gateway {
    /// Builds a client for every provider with a configured credential.
    pub fn new(config: &Config) -> Result<Self> {
        let mut gateway = Self::default();

        for provider in ProviderId::all() {
            let provider_config = config.provider(provider);
            let backend = if provider_config.is_configured() {
                Some(Self::build_backend(provider, config)?)
            } else {
                None
            };

            gateway = gateway.register(provider, backend, provider_config.model.clone());
        }

        Ok(gateway)
    }

    fn build_backend(provider: ProviderId, config: &Config) -> Result<Arc<dyn CompletionBackend>> {
        let provider_config = config.provider(provider);
        let backend: Arc<dyn CompletionBackend> = match provider {
            ProviderId::Gemini => Arc::new(GeminiClient::new(provider_config)?),
            ProviderId::Groq => Arc::new(GroqClient::new(provider_config)?),
        };
        Ok(backend)
    }

    /// Adds or replaces the table entry for `provider`. `None` marks it unavailable.
    pub fn register(
        mut self,
        provider: ProviderId,
        backend: Option<Arc<dyn CompletionBackend>>,
        default_model: impl Into<String>,
    ) -> Self {
        self.providers.insert(
            provider,
            ProviderEntry {
                backend,
                default_model: default_model.into(),
            },
        );
        self
    }

    pub fn is_available(&self, provider: ProviderId) -> bool {
        self.providers
            .get(&provider)
            .is_some_and(|entry| entry.backend.is_some())
    }

    pub fn statuses(&self) -> Vec<ProviderStatus> {
        ProviderId::all()
            .map(|provider| ProviderStatus {
                provider,
                available: self.is_available(provider),
                default_model: self
                    .providers
                    .get(&provider)
                    .map(|entry| entry.default_model.clone())
                    .unwrap_or_else(|| provider.default_model().to_string()),
            })
            .collect()
    }

    /// Sends `prompt` to the provider named by `provider`.
    ///
    /// `model` overrides the provider's default model when non-empty. Both the
    /// identifier and availability are checked before any network traffic.
    pub async fn complete(
        &self,
        prompt: &str,
        provider: &str,
        model: Option<&str>,
    ) -> Result<CompletionResult> {
        let provider = ProviderId::parse(provider)?;

        let entry = self
            .providers
            .get(&provider)
            .ok_or(CodepixError::ProviderUnavailable { provider })?;
        let backend = entry
            .backend
            .as_ref()
            .ok_or(CodepixError::ProviderUnavailable { provider })?;

        let model = model
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(entry.default_model.as_str());

        let request = CompletionRequest {
            prompt: prompt.to_string(),
            provider,
            model: model.to_string(),
        };

        Self::dispatch(backend.as_ref(), request).await
    }

    async fn dispatch(
        backend: &dyn CompletionBackend,
        request: CompletionRequest,
    ) -> Result<CompletionResult> {
        let start = Instant::now();
        let raw_text = backend.complete(&request.prompt, &request.model).await?;
        let elapsed = start.elapsed();

        tracing::debug!(
            provider = %request.provider,
            model = %request.model,
            elapsed_ms = elapsed.as_millis() as u64,
            "Provider completion finished"
        );

        Ok(CompletionResult {
            raw_text,
            model: request.model,
            provider: request.provider,
            time_taken: format_elapsed(elapsed),
        })
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} seconds", elapsed.as_secs_f64())
}
