//! HTTP-level tests for the user endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

use atelier_db::repositories::UserRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_returns_201_and_hides_password(pool: PgPool) {
    let app = common::build_idle_app(pool.clone());

    let response = post_json(
        app.clone(),
        "/api/users",
        json!({ "username": "ada", "password": "analytical-engine" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "ada");
    assert!(json.get("password").is_none());
    assert!(json.get("passwordHash").is_none());

    let stored = UserRepo::find_by_username(&pool, "ada").await.unwrap().unwrap();
    assert!(stored.password_hash.starts_with("$argon2id$"));

    let id = json["id"].as_i64().unwrap();
    let response = get(app, &format!("/api/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "ada");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_returns_409(pool: PgPool) {
    let app = common::build_idle_app(pool);
    let body = json!({ "username": "grace", "password": "compiler-1952" });

    let first = post_json(app.clone(), "/api/users", body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(app, "/api/users", body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn short_password_returns_400(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = post_json(
        app,
        "/api/users",
        json!({ "username": "linus", "password": "short" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "Password must be at least 8 characters long"
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_username_returns_400(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = post_json(app, "/api/users", json!({ "password": "long-enough" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "username is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_user_returns_404(pool: PgPool) {
    let app = common::build_idle_app(pool);

    let response = get(app, "/api/users/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "User with id 999999 not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn users_are_listed_newest_first(pool: PgPool) {
    let app = common::build_idle_app(pool);
    for name in ["first", "second"] {
        let response = post_json(
            app.clone(),
            "/api/users",
            json!({ "username": name, "password": "password-123" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let list = body_json(get(app, "/api/users?limit=10").await).await;
    assert_eq!(list[0]["username"], "second");
    assert_eq!(list[1]["username"], "first");
}
