use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;

use crate::error::CodepixError;

/// JSON body extractor whose rejections use the API error envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(CodepixError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for CodepixError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> CodepixError {
    // Buffering stops at the `DefaultBodyLimit` set on the router.
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return CodepixError::PayloadTooLarge(format!(
            "Request body is too large: {}",
            rejection.body_text()
        ));
    }

    match rejection {
        JsonRejection::JsonDataError(err) => {
            CodepixError::Validation(format!("Invalid JSON: {}", err.body_text()))
        }
        JsonRejection::JsonSyntaxError(err) => {
            CodepixError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => CodepixError::Validation(
            "Missing `Content-Type: application/json` header".to_string(),
        ),
        JsonRejection::BytesRejection(err) => {
            CodepixError::Validation(format!("Failed to read request body: {}", err.body_text()))
        }
        _ => CodepixError::Validation(rejection.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[allow(dead_code)]
        prompt: String,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<(), CodepixError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }
        let request = builder.body(Body::from(body)).unwrap();
        AppJson::<Payload>::from_request(request, &()).await.map(|_| ())
    }

    #[tokio::test]
    async fn syntax_error_is_validation() {
        let err = extract(Some("application/json"), "{not json").await.unwrap_err();
        assert!(matches!(err, CodepixError::Validation(ref m) if m.starts_with("JSON syntax error")));
    }

    #[tokio::test]
    async fn missing_content_type_is_validation() {
        let err = extract(None, r#"{"prompt":"x"}"#).await.unwrap_err();
        assert!(matches!(err, CodepixError::Validation(ref m) if m.contains("Content-Type")));
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let body = format!(r#"{{"prompt":"{}"}}"#, "x".repeat(256));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .header("content-length", body.len())
            .body(Body::from(body))
            .unwrap();
        let app = axum::Router::new()
            .route(
                "/",
                axum::routing::post(|AppJson(_): AppJson<Payload>| async { "ok" }),
            )
            .layer(axum::extract::DefaultBodyLimit::max(64));

        let response = tower::ServiceExt::oneshot(app, request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn wrong_shape_is_validation() {
        let err = extract(Some("application/json"), r#"{"prompt": 3}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, CodepixError::Validation(ref m) if m.starts_with("Invalid JSON")));
    }
}
