//! Wire-format tests for `OpenAiClient` against a mock HTTP server.

use atelier_openai::{
    ChatMessage, ChatRequest, ImageRequest, ModelProvider, OpenAiClient, OpenAiConfig,
    ProviderError,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OpenAiClient {
    let config = OpenAiConfig {
        api_key: "sk-test".to_string(),
        base_url: format!("{}/v1", server.uri()),
        chat_model: "gpt-4o".to_string(),
        image_model: "dall-e-3".to_string(),
        timeout_secs: 5,
    };
    OpenAiClient::new(config).expect("client should build")
}

fn image_request() -> ImageRequest {
    ImageRequest {
        prompt: "Linen napkins".to_string(),
        size: "1792x1024".to_string(),
        quality: "hd".to_string(),
    }
}

#[tokio::test]
async fn image_generation_sends_expected_body_and_returns_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({
            "model": "dall-e-3",
            "prompt": "Linen napkins",
            "n": 1,
            "size": "1792x1024",
            "quality": "hd",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "created": 1,
            "data": [{ "url": "https://cdn.example/napkins.png" }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let url = client_for(&server)
        .generate_image(&image_request())
        .await
        .unwrap();

    assert_eq!(url.as_deref(), Some("https://cdn.example/napkins.png"));
}

#[tokio::test]
async fn image_generation_without_data_yields_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "created": 1, "data": [] })))
        .mount(&server)
        .await;

    let url = client_for(&server)
        .generate_image(&image_request())
        .await
        .unwrap();

    assert!(url.is_none());
}

#[tokio::test]
async fn chat_completion_requests_json_mode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "response_format": { "type": "json_object" },
            "temperature": 0.5,
            "messages": [{ "role": "system", "content": "Be brief" }],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "{\"ok\":true}" } }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = ChatRequest {
        messages: vec![ChatMessage::system("Be brief")],
        temperature: Some(0.5),
    };
    let content = client_for(&server).complete_json(&request).await.unwrap();

    assert_eq!(content.as_deref(), Some("{\"ok\":true}"));
}

#[tokio::test]
async fn api_error_message_is_extracted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" },
        })))
        .mount(&server)
        .await;

    let request = ChatRequest {
        messages: vec![ChatMessage::user("hi")],
        temperature: None,
    };
    let err = client_for(&server).complete_json(&request).await.unwrap_err();

    match err {
        ProviderError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_is_kept_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/images/generations"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate_image(&image_request())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Provider API error (502): bad gateway");
}
