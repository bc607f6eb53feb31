use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{CodepixError, Result};

/// Completion providers the gateway knows how to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Gemini,
    Groq,
}

/// Wire identifiers, matched case-insensitively.
const PROVIDER_TABLE: &[(&str, ProviderId)] =
    &[("gemini", ProviderId::Gemini), ("groq", ProviderId::Groq)];

impl ProviderId {
    pub const DEFAULT: ProviderId = ProviderId::Gemini;

    pub fn all() -> impl Iterator<Item = ProviderId> {
        PROVIDER_TABLE.iter().map(|(_, id)| *id)
    }

    /// Resolves a caller-supplied identifier, ignoring ASCII case.
    pub fn parse(value: &str) -> Result<Self> {
        PROVIDER_TABLE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(value))
            .map(|(_, id)| *id)
            .ok_or_else(|| CodepixError::UnsupportedProvider(value.to_string()))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Groq => "groq",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Gemini => "Gemini",
            Self::Groq => "Groq",
        }
    }

    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Gemini => "GEMINI_API_KEY",
            Self::Groq => "GROQ_API_KEY",
        }
    }

    pub fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-1.5-flash",
            Self::Groq => "llama-3.3-70b-versatile",
        }
    }

    /// Human-readable list of identifiers, e.g. `'gemini' and 'groq'`.
    pub fn supported_list() -> String {
        let quoted: Vec<String> = PROVIDER_TABLE
            .iter()
            .map(|(name, _)| format!("'{name}'"))
            .collect();
        match quoted.split_last() {
            Some((last, rest)) if !rest.is_empty() => format!("{} and {last}", rest.join(", ")),
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = CodepixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Uniform completion capability implemented by every vendor client.
///
/// Implementations make exactly one outbound call per invocation and report
/// vendor failures as [`CodepixError::ProviderCall`] with the vendor's message.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String>;
}

/// A single dispatch to a resolved provider.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub provider: ProviderId,
    pub model: String,
}

/// Raw provider output plus the metadata attached by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResult {
    pub raw_text: String,
    pub model: String,
    pub provider: ProviderId,
    /// Wall-clock time of the provider call, formatted as `"<secs> seconds"`.
    pub time_taken: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ProviderId::parse("GEMINI").unwrap(), ProviderId::Gemini);
        assert_eq!(ProviderId::parse("Groq").unwrap(), ProviderId::Groq);
    }

    #[test]
    fn parse_rejects_unknown_identifier() {
        let err = ProviderId::parse("openai").unwrap_err();
        assert!(matches!(err, CodepixError::UnsupportedProvider(ref v) if v == "openai"));
    }

    #[test]
    fn parse_does_not_trim() {
        assert!(ProviderId::parse(" gemini").is_err());
    }

    #[test]
    fn supported_list_reads_naturally() {
        assert_eq!(ProviderId::supported_list(), "'gemini' and 'groq'");
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_value(ProviderId::Groq).unwrap();
        assert_eq!(json, "groq");
    }
}
