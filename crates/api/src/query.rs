//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// `?limit=` for the newest-first list endpoints.
///
/// Clamped in the handler via `clamp_limit`.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
