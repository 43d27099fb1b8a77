//! HTTP-level tests for the campaign and cross-modal optimization endpoints.

mod common;

use std::sync::Arc;

use atelier_openai::testing::ScriptedProvider;
use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

fn script_campaign(provider: &ScriptedProvider) {
    provider
        .push_chat_json(json!({
            "imagePrompt": "Stoneware dinner set on a farmhouse table",
            "contentType": "Product Description",
            "keywords": "stoneware, dinnerware",
            "features": ["dishwasher safe", "chip resistant"]
        }))
        .push_image("https://img.example/a.png")
        .push_image("https://img.example/b.png")
        .push_chat_json(json!({ "content": "Everyday elegance.", "qualityScore": 88 }))
        .push_chat_json(json!({ "code": "export const Card = () => null;" }))
        .push_chat_json(json!({ "overallScore": 92, "brandAlignment": 90, "consistency": 89 }))
        .push_chat_json(json!({ "workflowImprovements": ["parallelize images"] }));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn campaign_returns_full_payload(pool: PgPool) {
    let provider = Arc::new(ScriptedProvider::new());
    script_campaign(&provider);
    let app = common::build_test_app(pool, provider.clone());

    let response = post_json(
        app,
        "/api/generate-campaign",
        json!({ "productInfo": "16-piece stoneware dinner set" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["sessionId"].as_str().unwrap().starts_with("session_"));
    assert_eq!(json["images"].as_array().unwrap().len(), 2);
    assert_eq!(json["content"][0]["content"], "Everyday elegance.");
    assert_eq!(json["code"][0]["code"], "export const Card = () => null;");
    assert_eq!(json["workflow"].as_array().unwrap().len(), 6);
    assert_eq!(json["qualityAssessment"]["overallScore"], 92);
    assert_eq!(
        json["qualityAssessment"]["optimizations"]["workflowImprovements"][0],
        "parallelize images"
    );
    assert_eq!(provider.calls().len(), 7);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn campaign_is_not_persisted(pool: PgPool) {
    let provider = Arc::new(ScriptedProvider::new());
    script_campaign(&provider);
    let app = common::build_test_app(pool, provider);

    let response = post_json(
        app.clone(),
        "/api/generate-campaign",
        json!({ "productInfo": "Stoneware set" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    for uri in ["/api/generated-images", "/api/generated-content", "/api/generated-code"] {
        let list = body_json(get(app.clone(), uri).await).await;
        assert!(list.as_array().unwrap().is_empty(), "{uri} should be empty");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failing_campaign_step_returns_500(pool: PgPool) {
    let provider = Arc::new(ScriptedProvider::new());
    provider
        .push_chat_json(json!({}))
        .push_image("https://img.example/a.png")
        .push_image("https://img.example/b.png")
        .push_chat_reply(Err(ScriptedProvider::api_error(500, "The server had an error")));
    let app = common::build_test_app(pool, provider.clone());

    let response = post_json(
        app,
        "/api/generate-campaign",
        json!({ "productInfo": "Stoneware set" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await["message"],
        "Failed to generate content: Provider API error (500): The server had an error"
    );
    assert_eq!(provider.calls().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn campaign_requires_product_info(pool: PgPool) {
    let provider = Arc::new(ScriptedProvider::new());
    let app = common::build_test_app(pool, provider.clone());

    let response = post_json(app, "/api/generate-campaign", json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(provider.calls().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn optimize_content_returns_prompts(pool: PgPool) {
    let provider = Arc::new(ScriptedProvider::new());
    provider.push_chat_json(json!({
        "optimizedPrompts": { "image": "Warm-lit stoneware" },
        "alignmentScore": 0,
        "improvements": ["Match copy to imagery"]
    }));
    let app = common::build_test_app(pool, provider);

    let response = post_json(
        app,
        "/api/optimize-content",
        json!({
            "imagePrompt": "Stoneware",
            "contentText": "Durable plates",
            "codeRequirements": "Product gallery"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["optimizedPrompts"]["image"], "Warm-lit stoneware");
    assert_eq!(json["optimizedPrompts"]["content"], "Durable plates");
    assert_eq!(json["optimizedPrompts"]["code"], "Product gallery");
    assert_eq!(json["alignmentScore"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn optimize_content_requires_every_input(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = post_json(
        app,
        "/api/optimize-content",
        json!({ "imagePrompt": "Stoneware", "contentText": "Durable plates" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "codeRequirements is required");
}
