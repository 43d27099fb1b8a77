//! Handlers for marketing copy generation.

use atelier_core::content::{ContentLength, ContentType, Tone};
use atelier_core::listing::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use atelier_core::validation::require_text;
use atelier_db::models::generated_content::{CreateGeneratedContent, GeneratedContent};
use atelier_db::repositories::GeneratedContentRepo;
use atelier_pipeline::content::{generate_content, ContentAlternative, ContentGenerationRequest};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::LimitParams;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub content_type: Option<String>,
    pub product_info: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentResponse {
    pub content: GeneratedContent,
    pub alternatives: Vec<ContentAlternative>,
}

/// POST /api/generate-content
///
/// Generate copy for a product and record the main variant. Alternatives are
/// returned but not stored.
pub async fn generate_content_handler(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateContentRequest>,
) -> AppResult<impl IntoResponse> {
    let product_info = require_text("productInfo", input.product_info.as_deref())?;
    let keywords = input
        .keywords
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string);

    let request = ContentGenerationRequest {
        content_type: ContentType::from_label(input.content_type.as_deref().unwrap_or_default()),
        product_info: product_info.to_string(),
        tone: Tone::from_label(input.tone.as_deref().unwrap_or_default()),
        length: ContentLength::from_label(input.length.as_deref().unwrap_or_default()),
        keywords,
    };
    let result = generate_content(state.provider.as_ref(), &request).await?;

    let content = GeneratedContentRepo::create(
        &state.pool,
        &CreateGeneratedContent {
            content_type: request.content_type.label().to_string(),
            prompt: request.product_info.clone(),
            generated_text: result.content,
            tone: request.tone.label().to_string(),
            length: request.length.label().to_string(),
            keywords: request.keywords.clone(),
            quality_score: result.quality_score,
        },
    )
    .await?;

    tracing::info!(
        content_id = content.id,
        content_type = %content.content_type,
        quality_score = content.quality_score,
        "Generated content recorded",
    );

    Ok(Json(GenerateContentResponse {
        content,
        alternatives: result.alternatives,
    }))
}

/// GET /api/generated-content?limit=
pub async fn list_generated_content(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let content = GeneratedContentRepo::list(&state.pool, limit).await?;

    Ok(Json(content))
}
