use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::{BoxError, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::response::{ApiResponse, ErrorCode};
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let server = &state.config.server;
    let timeout = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .timeout(Duration::from_secs(server.request_timeout_secs));
    let body_limit = DefaultBodyLimit::max(server.max_body_bytes);

    let ai = Router::new()
        .route("/generate", post(handlers::ai::generate))
        .route("/explain", post(handlers::ai::explain))
        .route("/translate", post(handlers::ai::translate))
        .route("/optimize", post(handlers::ai::optimize));

    let api = Router::new()
        .nest("/ai", ai)
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router());

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .nest("/api", api)
        .fallback(not_found)
        .layer(body_limit)
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiResponse<()> {
    ApiResponse::error(ErrorCode::NotFound, "Route not found")
}

async fn handle_middleware_error(err: BoxError) -> ApiResponse<()> {
    if err.is::<tower::timeout::error::Elapsed>() {
        tracing::warn!("Request exceeded its time limit");
        ApiResponse::error(ErrorCode::RequestTimeout, "Request timed out")
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        ApiResponse::error(ErrorCode::InternalError, err.to_string())
    }
}
