//! Product image generation.

use atelier_core::image::{build_image_prompt, AspectRatio, BrandStyle, ImageQuality, MAX_BATCH_SIZE};
use atelier_core::quality::{IMAGE_SCORE_MAX, IMAGE_SCORE_MIN};
use atelier_core::types::Score;
use atelier_openai::{ImageRequest, ModelProvider};
use rand::Rng;
use serde::Serialize;

use crate::error::GenerationError;

/// Parameters for one image batch.
#[derive(Debug, Clone)]
pub struct ImageGenerationRequest {
    pub prompt: String,
    pub brand_style: BrandStyle,
    pub aspect_ratio: AspectRatio,
    pub quality: ImageQuality,
    /// Clamped into `[1, MAX_BATCH_SIZE]` before any call is made.
    pub batch_size: u32,
}

/// One generated image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImageResult {
    pub url: String,
    pub quality_score: Score,
}

/// Generate a batch of product images, one provider call at a time.
///
/// Replies without a URL are skipped, so fewer images than requested may
/// come back. The first failing call aborts the batch.
pub async fn generate_product_images(
    provider: &dyn ModelProvider,
    request: &ImageGenerationRequest,
) -> Result<Vec<GeneratedImageResult>, GenerationError> {
    let count = request.batch_size.clamp(1, MAX_BATCH_SIZE);
    let provider_request = ImageRequest {
        prompt: build_image_prompt(&request.prompt, request.brand_style),
        size: request.aspect_ratio.size().to_string(),
        quality: request.quality.provider_value().to_string(),
    };

    let mut images = Vec::with_capacity(count as usize);
    for index in 0..count {
        let url = provider
            .generate_image(&provider_request)
            .await
            .map_err(GenerationError::Images)?;

        match url {
            Some(url) => images.push(GeneratedImageResult {
                url,
                quality_score: random_image_score(),
            }),
            None => tracing::warn!(index, "Image reply carried no URL, skipping"),
        }
    }

    tracing::debug!(requested = count, generated = images.len(), "Image batch complete");
    Ok(images)
}

/// Placeholder score: images are not evaluated, only stamped.
fn random_image_score() -> Score {
    rand::rng().random_range(IMAGE_SCORE_MIN..IMAGE_SCORE_MAX)
}
