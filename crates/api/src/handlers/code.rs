//! Handlers for component code generation.

use atelier_core::code::{Complexity, ComponentType, Framework};
use atelier_core::listing::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use atelier_core::validation::require_text;
use atelier_db::models::generated_code::{CreateGeneratedCode, GeneratedCode};
use atelier_db::repositories::GeneratedCodeRepo;
use atelier_pipeline::code::{generate_code, CodeAnalysis, CodeGenerationRequest};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::query::LimitParams;
use crate::state::AppState;

/// Request body for `POST /api/generate-code`. Both flags default to `true`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCodeRequest {
    pub component_type: Option<String>,
    pub requirements: Option<String>,
    pub framework: Option<String>,
    pub complexity: Option<String>,
    #[serde(rename = "includeTypeScript")]
    pub include_typescript: Option<bool>,
    pub include_comments: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct GenerateCodeResponse {
    pub code: GeneratedCode,
    pub analysis: CodeAnalysis,
}

/// POST /api/generate-code
pub async fn generate_code_handler(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateCodeRequest>,
) -> AppResult<impl IntoResponse> {
    let requirements = require_text("requirements", input.requirements.as_deref())?;

    let request = CodeGenerationRequest {
        component_type: ComponentType::from_label(
            input.component_type.as_deref().unwrap_or_default(),
        ),
        requirements: requirements.to_string(),
        framework: Framework::from_label(input.framework.as_deref().unwrap_or_default()),
        complexity: Complexity::from_label(input.complexity.as_deref().unwrap_or_default()),
        include_typescript: input.include_typescript.unwrap_or(true),
        include_comments: input.include_comments.unwrap_or(true),
    };
    let result = generate_code(state.provider.as_ref(), &request).await?;

    let code = GeneratedCodeRepo::create(
        &state.pool,
        &CreateGeneratedCode {
            component_type: request.component_type.label().to_string(),
            requirements: request.requirements.clone(),
            framework: request.framework.label().to_string(),
            code: result.code,
            complexity: request.complexity.label().to_string(),
            include_typescript: request.include_typescript,
        },
    )
    .await?;

    tracing::info!(
        code_id = code.id,
        component_type = %code.component_type,
        framework = %code.framework,
        "Generated code recorded",
    );

    Ok(Json(GenerateCodeResponse {
        code,
        analysis: result.analysis,
    }))
}

/// GET /api/generated-code?limit=
pub async fn list_generated_code(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let code = GeneratedCodeRepo::list(&state.pool, limit).await?;

    Ok(Json(code))
}
