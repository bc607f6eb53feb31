//! Code task handlers.
//!
//! Each handler validates its body, runs one task through the assistant and
//! wraps the resulting [`TaskEnvelope`] in the API envelope.

use axum::extract::State;

use crate::api::dto::{ExplainRequest, GenerateRequest, OptimizeRequest, TranslateRequest};
use crate::api::extractors::AppJson;
use crate::api::response::{ApiError, ApiResponse};
use crate::api::AppState;
use crate::error::{CodepixError, Result};
use crate::models::{ExplainTask, GenerateTask, OptimizeTask, TaskEnvelope, TranslateTask};

fn respond(task: &'static str, outcome: Result<TaskEnvelope>) -> ApiResponse<TaskEnvelope> {
    match outcome {
        Ok(envelope) => ApiResponse::success(envelope),
        Err(error @ CodepixError::Validation(_)) => error.into(),
        Err(error) => {
            tracing::error!(task, error = %error, "Code task failed");
            error.into()
        }
    }
}

/// `POST /api/ai/generate`
///
/// Generates code for a natural-language task and returns a single fenced
/// code block.
#[utoipa::path(
    post,
    path = "/api/ai/generate",
    tag = "ai",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated code block", body = TaskEnvelope),
        (status = 400, description = "Missing prompt", body = ApiError),
        (status = 408, description = "Request timed out", body = ApiError),
        (status = 413, description = "Body too large", body = ApiError),
        (status = 500, description = "Provider failure", body = ApiError),
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    AppJson(req): AppJson<GenerateRequest>,
) -> ApiResponse<TaskEnvelope> {
    let outcome = match GenerateTask::try_from(req) {
        Ok(task) => state.assistant.generate(&task).await,
        Err(e) => Err(e),
    };
    respond("generate", outcome)
}

/// `POST /api/ai/explain`
#[utoipa::path(
    post,
    path = "/api/ai/explain",
    tag = "ai",
    request_body = ExplainRequest,
    responses(
        (status = 200, description = "Explanation text", body = TaskEnvelope),
        (status = 400, description = "Missing prompt", body = ApiError),
        (status = 408, description = "Request timed out", body = ApiError),
        (status = 413, description = "Body too large", body = ApiError),
        (status = 500, description = "Provider failure", body = ApiError),
    )
)]
pub async fn explain(
    State(state): State<AppState>,
    AppJson(req): AppJson<ExplainRequest>,
) -> ApiResponse<TaskEnvelope> {
    let outcome = match ExplainTask::try_from(req) {
        Ok(task) => state.assistant.explain(&task).await,
        Err(e) => Err(e),
    };
    respond("explain", outcome)
}

/// `POST /api/ai/translate`
///
/// Translates code between languages. The envelope echoes both languages.
#[utoipa::path(
    post,
    path = "/api/ai/translate",
    tag = "ai",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated code block", body = TaskEnvelope),
        (status = 400, description = "Missing code", body = ApiError),
        (status = 408, description = "Request timed out", body = ApiError),
        (status = 413, description = "Body too large", body = ApiError),
        (status = 500, description = "Provider failure", body = ApiError),
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    AppJson(req): AppJson<TranslateRequest>,
) -> ApiResponse<TaskEnvelope> {
    let outcome = match TranslateTask::try_from(req) {
        Ok(task) => state.assistant.translate(&task).await,
        Err(e) => Err(e),
    };
    respond("translate", outcome)
}

/// `POST /api/ai/optimize`
#[utoipa::path(
    post,
    path = "/api/ai/optimize",
    tag = "ai",
    request_body = OptimizeRequest,
    responses(
        (status = 200, description = "Optimized code with explanation", body = TaskEnvelope),
        (status = 400, description = "Missing code", body = ApiError),
        (status = 408, description = "Request timed out", body = ApiError),
        (status = 413, description = "Body too large", body = ApiError),
        (status = 500, description = "Provider failure", body = ApiError),
    )
)]
pub async fn optimize(
    State(state): State<AppState>,
    AppJson(req): AppJson<OptimizeRequest>,
) -> ApiResponse<TaskEnvelope> {
    let outcome = match OptimizeTask::try_from(req) {
        Ok(task) => state.assistant.optimize(&task).await,
        Err(e) => Err(e),
    };
    respond("optimize", outcome)
}
