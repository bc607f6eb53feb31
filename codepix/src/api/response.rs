//! Response bodies shared by every JSON endpoint.
//!
//! Success bodies are the payload itself, with no wrapper. Failures carry the
//! message as a plain string under `error`, next to a machine-readable code:
//!
//! ```json
//! { "model": "gemini-1.5-flash", "modelProvider": "gemini", "result": "...", "time_taken": "0.84 seconds" }
//! { "error": "Missing \"code\" in request body", "code": "invalid_request" }
//! ```
//!
//! Only malformed, incomplete or oversized requests are client errors. A bad
//! provider name, a provider without credentials and a failed upstream call
//! are all reported as `internal_error` with the underlying message left
//! intact so the caller can show it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::CodepixError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Body was not JSON or a required field was missing. HTTP 400.
    InvalidRequest,
    /// HTTP 404.
    NotFound,
    /// The request did not finish within `REQUEST_TIMEOUT_SECS`. HTTP 408.
    RequestTimeout,
    /// Body exceeded `MAX_BODY_BYTES`. HTTP 413.
    PayloadTooLarge,
    /// Provider selection or the provider call failed. HTTP 500.
    InternalError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::RequestTimeout => "request_timeout",
            Self::PayloadTooLarge => "payload_too_large",
            Self::InternalError => "internal_error",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure body: `{"error": "<message>", "code": "<code>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiError {
    #[serde(rename = "error")]
    pub message: String,
    pub code: ErrorCode,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
enum Body<T> {
    Data(T),
    Error(ApiError),
}

/// A JSON body plus the status it is sent with.
#[derive(Debug, Clone)]
pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    body: Body<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            status: StatusCode::OK,
            body: Body::Data(data),
        }
    }

    /// Status comes from `code`.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: code.status(),
            body: Body::Error(ApiError {
                message: message.into(),
                code,
            }),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        match &self.body {
            Body::Data(data) => Some(data),
            Body::Error(_) => None,
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.body {
            Body::Data(_) => None,
            Body::Error(error) => Some(error),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl<T: Serialize> From<CodepixError> for ApiResponse<T> {
    fn from(err: CodepixError) -> Self {
        let code = match err {
            CodepixError::Validation(_) => ErrorCode::InvalidRequest,
            CodepixError::PayloadTooLarge(_) => ErrorCode::PayloadTooLarge,
            CodepixError::UnsupportedProvider(_)
            | CodepixError::ProviderUnavailable { .. }
            | CodepixError::ProviderCall { .. }
            | CodepixError::Internal(_) => ErrorCode::InternalError,
        };
        ApiResponse::error(code, err.to_string())
    }
}
