//! Integration tests for the asset and user repositories.
//!
//! Exercises inserts, newest-first ordering, limit handling and the
//! username uniqueness constraint against a real database.

use atelier_db::models::generated_code::CreateGeneratedCode;
use atelier_db::models::generated_content::CreateGeneratedContent;
use atelier_db::models::generated_image::CreateGeneratedImage;
use atelier_db::models::user::CreateUser;
use atelier_db::repositories::{
    GeneratedCodeRepo, GeneratedContentRepo, GeneratedImageRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_image(url: &str) -> CreateGeneratedImage {
    CreateGeneratedImage {
        prompt: "Copper saucepan on a marble counter".to_string(),
        brand_style: "Williams-Sonoma Classic".to_string(),
        image_url: url.to_string(),
        quality_score: 91,
        aspect_ratio: "Square (1:1)".to_string(),
    }
}

fn new_content(text: &str, keywords: Option<&str>) -> CreateGeneratedContent {
    CreateGeneratedContent {
        content_type: "Product Description".to_string(),
        prompt: "Hand-thrown stoneware dinner plates".to_string(),
        generated_text: text.to_string(),
        tone: "Luxury".to_string(),
        length: "Medium (100-200 words)".to_string(),
        keywords: keywords.map(str::to_string),
        quality_score: 88,
    }
}

fn new_code(code: &str) -> CreateGeneratedCode {
    CreateGeneratedCode {
        component_type: "Product Card".to_string(),
        requirements: "Show price and rating".to_string(),
        framework: "React + Tailwind".to_string(),
        code: code.to_string(),
        complexity: "Intermediate".to_string(),
        include_typescript: true,
    }
}

// ---------------------------------------------------------------------------
// Generated images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_create_returns_inserted_row(pool: PgPool) {
    let image = GeneratedImageRepo::create(&pool, &new_image("https://img/1.png"))
        .await
        .unwrap();

    assert!(image.id > 0);
    assert_eq!(image.image_url, "https://img/1.png");
    assert_eq!(image.quality_score, 91);
    assert_eq!(image.brand_style, "Williams-Sonoma Classic");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn image_list_is_newest_first_and_limited(pool: PgPool) {
    for i in 1..=3 {
        GeneratedImageRepo::create(&pool, &new_image(&format!("https://img/{i}.png")))
            .await
            .unwrap();
    }

    let all = GeneratedImageRepo::list(&pool, 50).await.unwrap();
    let urls: Vec<_> = all.iter().map(|i| i.image_url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["https://img/3.png", "https://img/2.png", "https://img/1.png"]
    );

    let newest = GeneratedImageRepo::list(&pool, 1).await.unwrap();
    assert_eq!(newest.len(), 1);
    assert_eq!(newest[0].image_url, "https://img/3.png");
}

// ---------------------------------------------------------------------------
// Generated content
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn content_keywords_are_optional(pool: PgPool) {
    let with = GeneratedContentRepo::create(&pool, &new_content("first", Some("stoneware")))
        .await
        .unwrap();
    let without = GeneratedContentRepo::create(&pool, &new_content("second", None))
        .await
        .unwrap();

    assert_eq!(with.keywords.as_deref(), Some("stoneware"));
    assert!(without.keywords.is_none());

    let listed = GeneratedContentRepo::list(&pool, 10).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].generated_text, "second");
}

// ---------------------------------------------------------------------------
// Generated code
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn code_list_respects_limit(pool: PgPool) {
    for i in 0..5 {
        GeneratedCodeRepo::create(&pool, &new_code(&format!("export const V{i} = 1;")))
            .await
            .unwrap();
    }

    let listed = GeneratedCodeRepo::list(&pool, 2).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].code, "export const V4 = 1;");
    assert!(listed[0].include_typescript);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_lookup_by_id_and_username(pool: PgPool) {
    let created = UserRepo::create(
        &pool,
        &CreateUser {
            username: "merchandiser".to_string(),
            password_hash: "$argon2id$placeholder".to_string(),
        },
    )
    .await
    .unwrap();

    let by_id = UserRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(by_id.username, "merchandiser");

    let by_name = UserRepo::find_by_username(&pool, "merchandiser")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_name.id, created.id);

    assert!(UserRepo::find_by_username(&pool, "Merchandiser")
        .await
        .unwrap()
        .is_none());
    assert_eq!(UserRepo::list(&pool, 50).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_violates_unique_constraint(pool: PgPool) {
    let input = CreateUser {
        username: "twin".to_string(),
        password_hash: "hash".to_string(),
    };
    UserRepo::create(&pool, &input).await.unwrap();

    let err = UserRepo::create(&pool, &input).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected unique violation, got {other:?}"),
    }
}
