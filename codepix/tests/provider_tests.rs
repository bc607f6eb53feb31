use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use codepix::config::ProviderConfig;
use codepix::error::CodepixError;
use codepix::llm::{CompletionBackend, GeminiClient, GroqClient, ProviderId};

fn provider_config(model: &str, base_url: String) -> ProviderConfig {
    ProviderConfig {
        api_key: Some("test-key".to_string()),
        base_url: Some(base_url),
        model: model.to_string(),
    }
}

fn chat_completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "llama-3.3-70b-versatile",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 1,
            "total_tokens": 2
        }
    })
}

fn gemini_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            {
                "content": {
                    "role": "model",
                    "parts": [{ "text": text }]
                },
                "finishReason": "STOP"
            }
        ]
    })
}

#[tokio::test]
async fn groq_sends_single_user_message_with_fixed_sampling() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "temperature": 0.7,
            "top_p": 1.0,
            "max_tokens": 2048,
            "messages": [{ "role": "user", "content": "write fizzbuzz" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion_body(
            "```python\nprint('fizz')\n```",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = GroqClient::new(&provider_config(
        "llama-3.3-70b-versatile",
        format!("{}/openai/v1", server.uri()),
    ))
    .unwrap();

    let text = client
        .complete("write fizzbuzz", "llama-3.3-70b-versatile")
        .await
        .unwrap();

    assert_eq!(text, "```python\nprint('fizz')\n```");
}

#[tokio::test]
async fn groq_api_error_message_is_passed_through_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Invalid API Key",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GroqClient::new(&provider_config(
        "llama-3.3-70b-versatile",
        format!("{}/openai/v1", server.uri()),
    ))
    .unwrap();

    let err = client
        .complete("hi", "llama-3.3-70b-versatile")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CodepixError::ProviderCall {
            provider: ProviderId::Groq,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Invalid API Key");
}

#[tokio::test]
async fn groq_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = GroqClient::new(&provider_config(
        "llama-3.3-70b-versatile",
        format!("{}/openai/v1", server.uri()),
    ))
    .unwrap();

    let err = client
        .complete("hi", "llama-3.3-70b-versatile")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn groq_empty_choices_is_provider_error() {
    let server = MockServer::start().await;

    let mut body = chat_completion_body("");
    body["choices"] = json!([]);

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = GroqClient::new(&provider_config(
        "llama-3.3-70b-versatile",
        format!("{}/openai/v1", server.uri()),
    ))
    .unwrap();

    let err = client
        .complete("hi", "llama-3.3-70b-versatile")
        .await
        .unwrap_err();

    assert!(matches!(err, CodepixError::ProviderCall { .. }));
}

#[tokio::test]
async fn gemini_posts_to_generate_content_with_api_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": "explain this" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(
            "This code adds two numbers.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&provider_config(
        "gemini-1.5-flash",
        format!("{}/v1beta/", server.uri()),
    ))
    .unwrap();

    let text = client
        .complete("explain this", "gemini-1.5-flash")
        .await
        .unwrap();

    assert_eq!(text, "This code adds two numbers.");
}

#[tokio::test]
async fn gemini_honours_model_override() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&provider_config(
        "gemini-1.5-flash",
        format!("{}/v1beta", server.uri()),
    ))
    .unwrap();

    assert_eq!(client.complete("x", "gemini-1.5-pro").await.unwrap(), "ok");
}

#[tokio::test]
async fn gemini_error_message_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&provider_config(
        "gemini-1.5-flash",
        format!("{}/v1beta", server.uri()),
    ))
    .unwrap();

    let err = client
        .complete("x", "gemini-1.5-flash")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CodepixError::ProviderCall {
            provider: ProviderId::Gemini,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "API key not valid. Please pass a valid API key."
    );
}

#[tokio::test]
async fn gemini_blocked_prompt_is_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&provider_config(
        "gemini-1.5-flash",
        format!("{}/v1beta", server.uri()),
    ))
    .unwrap();

    let err = client
        .complete("x", "gemini-1.5-flash")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Gemini response was blocked: SAFETY");
}

#[tokio::test]
async fn gemini_concatenates_text_parts_of_first_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                {
                    "content": {
                        "role": "model",
                        "parts": [
                            { "text": "```go\n" },
                            { "text": "package main\n" },
                            { "text": "```" }
                        ]
                    }
                },
                {
                    "content": { "role": "model", "parts": [{ "text": "ignored" }] }
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&provider_config(
        "gemini-1.5-flash",
        format!("{}/v1beta", server.uri()),
    ))
    .unwrap();

    let text = client.complete("x", "gemini-1.5-flash").await.unwrap();

    assert_eq!(text, "```go\npackage main\n```");
}

#[tokio::test]
async fn gemini_server_error_is_sent_once() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": { "code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&provider_config(
        "gemini-1.5-flash",
        format!("{}/v1beta", server.uri()),
    ))
    .unwrap();

    let err = client.complete("x", "gemini-1.5-flash").await.unwrap_err();

    assert_eq!(err.to_string(), "The model is overloaded.");
}

#[tokio::test]
async fn gemini_error_without_body_falls_back_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&provider_config(
        "gemini-1.5-flash",
        format!("{}/v1beta", server.uri()),
    ))
    .unwrap();

    let err = client.complete("x", "gemini-1.5-flash").await.unwrap_err();

    assert_eq!(err.to_string(), "502 Bad Gateway");
}
