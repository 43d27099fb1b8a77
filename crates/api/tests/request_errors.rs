//! Rejected requests must still answer with the `{message, code}` body.

mod common;

use std::sync::Arc;
use std::time::Duration;

use atelier_api::config::ServerConfig;
use atelier_api::router::build_app_router;
use atelier_api::state::AppState;
use atelier_openai::{ChatRequest, ImageRequest, ModelProvider, ProviderError};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn post_raw(app: Router, uri: &str, content_type: Option<&str>, body: &str) -> Response {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

async fn assert_json_bad_request(response: Response) -> String {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("application/json"), "got {content_type}");
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    json["message"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_field_type_is_json_400(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = post_json(
        app,
        "/api/generate-images",
        json!({ "prompt": "Oak bench", "batchSize": "3" }),
    )
    .await;

    let message = assert_json_bad_request(response).await;
    assert!(message.contains("batchSize"), "got {message}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn malformed_json_is_json_400(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = post_raw(
        app,
        "/api/generate-content",
        Some("application/json"),
        "{\"productInfo\": ",
    )
    .await;

    assert_json_bad_request(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_content_type_is_json_400(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = post_raw(app, "/api/generate-campaign", None, "{\"productInfo\":\"Mug\"}").await;

    assert_json_bad_request(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_limit_is_json_400(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = get(app, "/api/generated-code?limit=lots").await;

    assert_json_bad_request(response).await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_numeric_user_id_is_json_400(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = get(app, "/api/users/ada").await;

    assert_json_bad_request(response).await;
}

/// Provider whose calls never complete.
struct StalledProvider;

#[async_trait]
impl ModelProvider for StalledProvider {
    async fn generate_image(&self, _: &ImageRequest) -> Result<Option<String>, ProviderError> {
        std::future::pending().await
    }

    async fn complete_json(&self, _: &ChatRequest) -> Result<Option<String>, ProviderError> {
        std::future::pending().await
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn timed_out_campaign_is_json_408(pool: PgPool) {
    let config = ServerConfig {
        request_timeout_secs: 1,
        ..common::test_config()
    };
    let state = AppState {
        pool,
        provider: Arc::new(StalledProvider),
    };
    let app = build_app_router(state, &config);

    let response = tokio::time::timeout(
        Duration::from_secs(10),
        post_json(app, "/api/generate-campaign", json!({ "productInfo": "Mug" })),
    )
    .await
    .expect("timeout layer should answer");

    assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "REQUEST_TIMEOUT");
    assert_eq!(json["message"], "Request timed out");
}
