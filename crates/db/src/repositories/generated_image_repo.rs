//! Repository for the `generated_images` table.

use sqlx::PgPool;

use crate::models::generated_image::{CreateGeneratedImage, GeneratedImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, prompt, brand_style, image_url, quality_score, aspect_ratio, created_at";

/// Provides insert and newest-first listing for generated images.
pub struct GeneratedImageRepo;

impl GeneratedImageRepo {
    /// Insert a generated image, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGeneratedImage,
    ) -> Result<GeneratedImage, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_images (prompt, brand_style, image_url, quality_score, aspect_ratio)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedImage>(&query)
            .bind(&input.prompt)
            .bind(&input.brand_style)
            .bind(&input.image_url)
            .bind(input.quality_score)
            .bind(&input.aspect_ratio)
            .fetch_one(pool)
            .await
    }

    /// List generated images, newest first, capped at `limit` rows.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<GeneratedImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generated_images
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, GeneratedImage>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
