//! Route definitions for the generation endpoints.
//!
//! ```text
//! POST   /generate-images      generate_images
//! GET    /generated-images     list_generated_images
//! POST   /generate-content     generate_content_handler
//! GET    /generated-content    list_generated_content
//! POST   /generate-code        generate_code_handler
//! GET    /generated-code       list_generated_code
//! POST   /generate-campaign    generate_campaign
//! POST   /optimize-content     optimize_content
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{campaign, code, content, images};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-images", post(images::generate_images))
        .route("/generated-images", get(images::list_generated_images))
        .route("/generate-content", post(content::generate_content_handler))
        .route("/generated-content", get(content::list_generated_content))
        .route("/generate-code", post(code::generate_code_handler))
        .route("/generated-code", get(code::list_generated_code))
        .route("/generate-campaign", post(campaign::generate_campaign))
        .route("/optimize-content", post(campaign::optimize_content))
}
