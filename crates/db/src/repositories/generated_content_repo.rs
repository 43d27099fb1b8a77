//! Repository for the `generated_content` table.

use sqlx::PgPool;

use crate::models::generated_content::{CreateGeneratedContent, GeneratedContent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, content_type, prompt, generated_text, tone, length, keywords, \
                       quality_score, created_at";

/// Provides insert and newest-first listing for generated copy.
pub struct GeneratedContentRepo;

impl GeneratedContentRepo {
    /// Insert generated copy, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGeneratedContent,
    ) -> Result<GeneratedContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_content
                (content_type, prompt, generated_text, tone, length, keywords, quality_score)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedContent>(&query)
            .bind(&input.content_type)
            .bind(&input.prompt)
            .bind(&input.generated_text)
            .bind(&input.tone)
            .bind(&input.length)
            .bind(&input.keywords)
            .bind(input.quality_score)
            .fetch_one(pool)
            .await
    }

    /// List generated copy, newest first, capped at `limit` rows.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<GeneratedContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generated_content
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, GeneratedContent>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
