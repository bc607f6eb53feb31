use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::response::ApiResponse;
use crate::llm::ProviderId;

#[derive(Error, Debug)]
pub enum CodepixError {
    #[error("{0}")]
    Validation(String),

    #[error(
        "Unsupported model provider: {0}. Supported providers are {supported}.",
        supported = ProviderId::supported_list()
    )]
    UnsupportedProvider(String),

    #[error(
        "{display} client not available. Please check {env_var} environment variable and ensure the {display} API client is configured.",
        display = .provider.display_name(),
        env_var = .provider.env_var()
    )]
    ProviderUnavailable { provider: ProviderId },

    #[error("{message}")]
    ProviderCall {
        provider: ProviderId,
        message: String,
    },

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl CodepixError {
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Missing \"{field}\" in request body"))
    }

    pub fn provider_call(provider: ProviderId, message: impl Into<String>) -> Self {
        Self::ProviderCall {
            provider,
            message: message.into(),
        }
    }
}

impl IntoResponse for CodepixError {
    fn into_response(self) -> Response {
        ApiResponse::<()>::from(self).into_response()
    }
}

pub type Result<T> = std::result::Result<T, CodepixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_provider_names_offending_value() {
        let message = CodepixError::UnsupportedProvider("openai".to_string()).to_string();
        assert_eq!(
            message,
            "Unsupported model provider: openai. Supported providers are 'gemini' and 'groq'."
        );
    }

    #[test]
    fn unavailable_provider_names_env_var_and_client() {
        let message = CodepixError::ProviderUnavailable {
            provider: ProviderId::Groq,
        }
        .to_string();
        assert!(message.contains("GROQ_API_KEY"));
        assert!(message.starts_with("Groq client not available"));
    }

    #[test]
    fn provider_call_message_is_verbatim() {
        let err = CodepixError::provider_call(ProviderId::Gemini, "quota exhausted");
        assert_eq!(err.to_string(), "quota exhausted");
    }

    #[test]
    fn missing_field_message() {
        assert_eq!(
            CodepixError::missing_field("code").to_string(),
            "Missing \"code\" in request body"
        );
    }
}
