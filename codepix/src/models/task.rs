use serde::{Deserialize, Serialize};

use crate::llm::prompts::{DEFAULT_COMPLEXITY, DEFAULT_LANGUAGE, DEFAULT_TRANSLATE_TARGET};
use crate::llm::{CompletionResult, ProviderId};

/// Which provider (and optionally which model) a task should run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSelection {
    /// Caller-supplied identifier, resolved case-insensitively by the gateway.
    pub provider: String,
    pub model: Option<String>,
}

impl Default for ProviderSelection {
    fn default() -> Self {
        Self {
            provider: ProviderId::DEFAULT.as_str().to_string(),
            model: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTask {
    pub description: String,
    pub language: String,
    pub complexity: String,
    pub selection: ProviderSelection,
}

impl GenerateTask {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            complexity: DEFAULT_COMPLEXITY.to_string(),
            selection: ProviderSelection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainTask {
    pub code: String,
    pub selection: ProviderSelection,
}

impl ExplainTask {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            selection: ProviderSelection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateTask {
    pub code: String,
    pub source_language: String,
    pub target_language: String,
    pub selection: ProviderSelection,
}

impl TranslateTask {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            source_language: DEFAULT_LANGUAGE.to_string(),
            target_language: DEFAULT_TRANSLATE_TARGET.to_string(),
            selection: ProviderSelection::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeTask {
    pub code: String,
    pub language: String,
    pub selection: ProviderSelection,
}

impl OptimizeTask {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            selection: ProviderSelection::default(),
        }
    }
}

/// Normalized result of a task, as returned to HTTP callers.
///
/// Field names match what the CodePix frontend reads (`time_taken` stays
/// snake_case, the rest are camelCase).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TaskEnvelope {
    /// Model that produced the result.
    pub model: String,
    /// Provider that served the request.
    #[serde(rename = "modelProvider")]
    pub model_provider: ProviderId,
    /// Extracted code block, or the full reply for explain/optimize.
    pub result: String,
    /// Provider latency, e.g. `"1.42 seconds"`.
    pub time_taken: String,
    #[serde(rename = "sourceLanguage", skip_serializing_if = "Option::is_none")]
    pub source_language: Option<String>,
    #[serde(rename = "targetLanguage", skip_serializing_if = "Option::is_none")]
    pub target_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl From<CompletionResult> for TaskEnvelope {
    fn from(completion: CompletionResult) -> Self {
        Self {
            model: completion.model,
            model_provider: completion.provider,
            result: completion.raw_text,
            time_taken: completion.time_taken,
            source_language: None,
            target_language: None,
            language: None,
        }
    }
}
