use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;
use super::response;
use crate::llm::ProviderId;
use crate::models::TaskEnvelope;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CodePix API",
        version = "1.0.0",
        description = "Code generation, explanation, translation and optimization backed by hosted LLM providers.",
    ),
    paths(
        handlers::health::health_check,
        handlers::ai::generate,
        handlers::ai::explain,
        handlers::ai::translate,
        handlers::ai::optimize,
    ),
    components(schemas(
        response::ErrorCode,
        response::ApiError,
        ProviderId,
        TaskEnvelope,
        dto::GenerateRequest,
        dto::ExplainRequest,
        dto::TranslateRequest,
        dto::OptimizeRequest,
        handlers::health::HealthData,
        handlers::health::ProviderHealth,
    )),
    tags(
        (name = "health", description = "Health check"),
        (name = "ai", description = "Code tasks dispatched to a language model provider"),
    ),
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
