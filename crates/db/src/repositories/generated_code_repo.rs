//! Repository for the `generated_code` table.

use sqlx::PgPool;

use crate::models::generated_code::{CreateGeneratedCode, GeneratedCode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, component_type, requirements, framework, code, complexity, \
                       include_typescript, created_at";

/// Provides insert and newest-first listing for generated code.
pub struct GeneratedCodeRepo;

impl GeneratedCodeRepo {
    /// Insert generated code, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGeneratedCode,
    ) -> Result<GeneratedCode, sqlx::Error> {
        let query = format!(
            "INSERT INTO generated_code
                (component_type, requirements, framework, code, complexity, include_typescript)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GeneratedCode>(&query)
            .bind(&input.component_type)
            .bind(&input.requirements)
            .bind(&input.framework)
            .bind(&input.code)
            .bind(&input.complexity)
            .bind(input.include_typescript)
            .fetch_one(pool)
            .await
    }

    /// List generated code, newest first, capped at `limit` rows.
    pub async fn list(pool: &PgPool, limit: i64) -> Result<Vec<GeneratedCode>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generated_code
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, GeneratedCode>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
