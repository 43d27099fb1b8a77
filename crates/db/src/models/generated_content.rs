//! Generated marketing copy model and DTO.

use atelier_core::types::{DbId, Score, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `generated_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub id: DbId,
    pub content_type: String,
    /// The product information the copy was written from.
    pub prompt: String,
    pub generated_text: String,
    pub tone: String,
    pub length: String,
    pub keywords: Option<String>,
    pub quality_score: Score,
    pub created_at: Timestamp,
}

/// DTO for recording generated copy.
#[derive(Debug, Clone)]
pub struct CreateGeneratedContent {
    pub content_type: String,
    pub prompt: String,
    pub generated_text: String,
    pub tone: String,
    pub length: String,
    pub keywords: Option<String>,
    pub quality_score: Score,
}
