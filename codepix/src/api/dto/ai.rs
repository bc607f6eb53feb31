//! Code task request DTOs.

use serde::Deserialize;

use crate::error::{CodepixError, Result};
use crate::models::{ExplainTask, GenerateTask, OptimizeTask, ProviderSelection, TranslateTask};

/// Request body for `POST /api/ai/generate`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Natural-language description of the code to write. Required.
    pub prompt: Option<String>,
    /// Target language. Defaults to `"javascript"`.
    pub language: Option<String>,
    /// Complexity level. Defaults to `"intermediate"`.
    pub complexity: Option<String>,
    /// `"gemini"` or `"groq"`, case-insensitive. Defaults to `"gemini"`.
    pub model_provider: Option<String>,
    /// Overrides the provider's default model.
    pub model: Option<String>,
}

/// Request body for `POST /api/ai/explain`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainRequest {
    /// Code to explain. Required.
    pub prompt: Option<String>,
    pub model_provider: Option<String>,
    pub model: Option<String>,
}

/// Request body for `POST /api/ai/translate`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// Code to translate. Required.
    pub code: Option<String>,
    /// Defaults to `"javascript"`.
    pub source_language: Option<String>,
    /// Defaults to `"python"`.
    pub target_language: Option<String>,
    pub model_provider: Option<String>,
    pub model: Option<String>,
}

/// Request body for `POST /api/ai/optimize`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    /// Code to optimize. Required.
    pub code: Option<String>,
    /// Defaults to `"javascript"`.
    pub language: Option<String>,
    pub model_provider: Option<String>,
    pub model: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| CodepixError::missing_field(field))
}

/// Empty optional values fall back to the task default.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn selection(model_provider: Option<String>, model: Option<String>) -> ProviderSelection {
    let defaults = ProviderSelection::default();
    ProviderSelection {
        provider: non_blank(model_provider).unwrap_or(defaults.provider),
        model: non_blank(model),
    }
}

impl TryFrom<GenerateRequest> for GenerateTask {
    type Error = CodepixError;

    fn try_from(req: GenerateRequest) -> Result<Self> {
        let defaults = GenerateTask::new(required(req.prompt, "prompt")?);
        Ok(Self {
            language: non_blank(req.language).unwrap_or(defaults.language),
            complexity: non_blank(req.complexity).unwrap_or(defaults.complexity),
            selection: selection(req.model_provider, req.model),
            description: defaults.description,
        })
    }
}

impl TryFrom<ExplainRequest> for ExplainTask {
    type Error = CodepixError;

    fn try_from(req: ExplainRequest) -> Result<Self> {
        Ok(Self {
            code: required(req.prompt, "prompt")?,
            selection: selection(req.model_provider, req.model),
        })
    }
}

impl TryFrom<TranslateRequest> for TranslateTask {
    type Error = CodepixError;

    fn try_from(req: TranslateRequest) -> Result<Self> {
        let defaults = TranslateTask::new(required(req.code, "code")?);
        Ok(Self {
            source_language: non_blank(req.source_language).unwrap_or(defaults.source_language),
            target_language: non_blank(req.target_language).unwrap_or(defaults.target_language),
            selection: selection(req.model_provider, req.model),
            code: defaults.code,
        })
    }
}

impl TryFrom<OptimizeRequest> for OptimizeTask {
    type Error = CodepixError;

    fn try_from(req: OptimizeRequest) -> Result<Self> {
        let defaults = OptimizeTask::new(required(req.code, "code")?);
        Ok(Self {
            language: non_blank(req.language).unwrap_or(defaults.language),
            selection: selection(req.model_provider, req.model),
            code: defaults.code,
        })
    }
}
