//! Handlers for product image generation.

use atelier_core::image::{clamp_batch_size, AspectRatio, BrandStyle, ImageQuality};
use atelier_core::listing::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use atelier_core::validation::require_text;
use atelier_db::models::generated_image::{CreateGeneratedImage, GeneratedImage};
use atelier_db::repositories::GeneratedImageRepo;
use atelier_pipeline::images::{generate_product_images, ImageGenerationRequest};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::LimitParams;
use crate::state::AppState;

/// Request body for `POST /api/generate-images`. Unknown option labels fall
/// back to their defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImagesRequest {
    pub prompt: Option<String>,
    pub brand_style: Option<String>,
    pub aspect_ratio: Option<String>,
    pub quality: Option<String>,
    pub batch_size: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GenerateImagesResponse {
    pub images: Vec<GeneratedImage>,
}

/// POST /api/generate-images
///
/// Generate a batch of images and record each one.
pub async fn generate_images(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateImagesRequest>,
) -> AppResult<impl IntoResponse> {
    let prompt = require_text("prompt", input.prompt.as_deref())?;
    let brand_style = BrandStyle::from_label(input.brand_style.as_deref().unwrap_or_default());
    let aspect_ratio = AspectRatio::from_label(input.aspect_ratio.as_deref().unwrap_or_default());

    let request = ImageGenerationRequest {
        prompt: prompt.to_string(),
        brand_style,
        aspect_ratio,
        quality: ImageQuality::from_label(input.quality.as_deref().unwrap_or_default()),
        batch_size: clamp_batch_size(input.batch_size),
    };
    let results = generate_product_images(state.provider.as_ref(), &request).await?;

    let mut images = Vec::with_capacity(results.len());
    for result in results {
        let row = GeneratedImageRepo::create(
            &state.pool,
            &CreateGeneratedImage {
                prompt: prompt.to_string(),
                brand_style: brand_style.label().to_string(),
                image_url: result.url,
                quality_score: result.quality_score,
                aspect_ratio: aspect_ratio.label().to_string(),
            },
        )
        .await?;
        images.push(row);
    }

    tracing::info!(
        count = images.len(),
        brand_style = brand_style.label(),
        "Generated images recorded",
    );

    Ok(Json(GenerateImagesResponse { images }))
}

/// GET /api/generated-images?limit=
pub async fn list_generated_images(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let images = GeneratedImageRepo::list(&state.pool, limit).await?;

    Ok(Json(images))
}
