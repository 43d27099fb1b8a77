//! Generated product image model and DTO.

use atelier_core::types::{DbId, Score, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `generated_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    pub id: DbId,
    pub prompt: String,
    pub brand_style: String,
    pub image_url: String,
    pub quality_score: Score,
    pub aspect_ratio: String,
    pub created_at: Timestamp,
}

/// DTO for recording a generated image.
#[derive(Debug, Clone)]
pub struct CreateGeneratedImage {
    pub prompt: String,
    pub brand_style: String,
    pub image_url: String,
    pub quality_score: Score,
    pub aspect_ratio: String,
}
