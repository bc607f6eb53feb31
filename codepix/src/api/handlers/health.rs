use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::response::ApiResponse;
use crate::api::AppState;
use crate::llm::ProviderId;

/// Health data returned inside the response envelope.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct HealthData {
    pub status: String,
    /// RFC 3339 time at which the check ran.
    pub timestamp: String,
    pub version: String,
    pub providers: Vec<ProviderHealth>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct ProviderHealth {
    pub provider: ProviderId,
    /// `available` when a client was built at startup, otherwise `unavailable`.
    pub status: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct RootMessage {
    pub message: String,
}

/// `GET /`
pub async fn root() -> Json<RootMessage> {
    Json(RootMessage {
        message: "CodePix API".to_string(),
    })
}

/// `GET /health`
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service health status", body = HealthData),
    )
)]
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthData> {
    let providers = state
        .assistant
        .gateway()
        .statuses()
        .into_iter()
        .map(|status| ProviderHealth {
            provider: status.provider,
            status: if status.available {
                "available".to_string()
            } else {
                "unavailable".to_string()
            },
            model: status.default_model,
        })
        .collect();

    ApiResponse::success(HealthData {
        status: "OK".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        providers,
    })
}
