pub mod generation;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-images          generate + record images (POST)
/// /generated-images         newest-first list (GET)
/// /generate-content         generate + record copy (POST)
/// /generated-content        newest-first list (GET)
/// /generate-code            generate + record component code (POST)
/// /generated-code           newest-first list (GET)
/// /generate-campaign        orchestrated campaign (POST)
/// /optimize-content         cross-modal optimization (POST)
///
/// /users                    list, create
/// /users/{id}               get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(generation::router())
        .nest("/users", users::router())
}
