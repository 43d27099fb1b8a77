//! Handlers for the orchestrated campaign and cross-modal optimization.
//!
//! Neither endpoint persists anything.

use std::sync::Arc;

use atelier_core::validation::require_text;
use atelier_pipeline::cross_modal::optimize_across_modalities;
use atelier_pipeline::orchestrator::ContentOrchestrator;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCampaignRequest {
    pub product_info: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeContentRequest {
    pub image_prompt: Option<String>,
    pub content_text: Option<String>,
    pub code_requirements: Option<String>,
}

/// A fresh session id per request; sessions are not resumable.
fn new_session_id() -> String {
    format!("session_{}", chrono::Utc::now().timestamp_millis())
}

/// POST /api/generate-campaign
///
/// Run the full six-step campaign workflow for one product.
pub async fn generate_campaign(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateCampaignRequest>,
) -> AppResult<impl IntoResponse> {
    let product_info = require_text("productInfo", input.product_info.as_deref())?;

    let session_id = new_session_id();
    tracing::info!(session_id = %session_id, "Starting campaign");

    let mut orchestrator = ContentOrchestrator::new(Arc::clone(&state.provider), session_id);
    let result = orchestrator.generate_product_campaign(product_info).await?;

    Ok(Json(result))
}

/// POST /api/optimize-content
pub async fn optimize_content(
    State(state): State<AppState>,
    AppJson(input): AppJson<OptimizeContentRequest>,
) -> AppResult<impl IntoResponse> {
    let image_prompt = require_text("imagePrompt", input.image_prompt.as_deref())?;
    let content_text = require_text("contentText", input.content_text.as_deref())?;
    let code_requirements =
        require_text("codeRequirements", input.code_requirements.as_deref())?;

    let result = optimize_across_modalities(
        state.provider.as_ref(),
        image_prompt,
        content_text,
        code_requirements,
    )
    .await?;

    Ok(Json(result))
}
