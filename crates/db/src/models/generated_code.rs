//! Generated component code model and DTO.

use atelier_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `generated_code` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    pub id: DbId,
    pub component_type: String,
    pub requirements: String,
    pub framework: String,
    pub code: String,
    pub complexity: String,
    #[serde(rename = "includeTypeScript")]
    pub include_typescript: bool,
    pub created_at: Timestamp,
}

/// DTO for recording generated code.
#[derive(Debug, Clone)]
pub struct CreateGeneratedCode {
    pub component_type: String,
    pub requirements: String,
    pub framework: String,
    pub code: String,
    pub complexity: String,
    pub include_typescript: bool,
}
