use serde::Deserialize;
use std::env;

use crate::llm::ProviderId;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

/// Reads an optional secret or URL, treating blank values as unset.
fn env_non_empty(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub gemini: ProviderConfig,
    pub groq: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    // Whole-request timeout applied by the HTTP layer
    pub request_timeout_secs: u64,
    pub max_body_bytes: usize,
}

/// Connection settings for a single completion provider.
///
/// A provider without an API key is still constructed; it reports itself as
/// unavailable and every completion routed to it fails fast.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: String,
}

impl ProviderConfig {
    pub fn from_env(provider: ProviderId) -> Self {
        let prefix = provider.as_str().to_uppercase();
        Self {
            api_key: env_non_empty(provider.env_var()),
            base_url: env_non_empty(&format!("{prefix}_BASE_URL")),
            model: env_non_empty(&format!("{prefix}_MODEL"))
                .unwrap_or_else(|| provider.default_model().to_string()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 30,
            max_body_bytes: 1024 * 1024,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let defaults = ServerConfig::default();
        Self {
            server: ServerConfig {
                host: env::var("CODEPIX_HOST").unwrap_or(defaults.host),
                port: parse_env_or("PORT", defaults.port),
                request_timeout_secs: parse_env_or(
                    "REQUEST_TIMEOUT_SECS",
                    defaults.request_timeout_secs,
                ),
                max_body_bytes: parse_env_or("MAX_BODY_BYTES", defaults.max_body_bytes),
            },
            gemini: ProviderConfig::from_env(ProviderId::Gemini),
            groq: ProviderConfig::from_env(ProviderId::Groq),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn provider(&self, provider: ProviderId) -> &ProviderConfig {
        match provider {
            ProviderId::Gemini => &self.gemini,
            ProviderId::Groq => &self.groq,
        }
    }
}
