use std::sync::Arc;

use atelier_openai::ModelProvider;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Generative-model provider shared by every generation endpoint.
    pub provider: Arc<dyn ModelProvider>,
}
