//! Handlers for stored users.

use atelier_core::error::CoreError;
use atelier_core::listing::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use atelier_core::types::DbId;
use atelier_core::validation::require_text;
use atelier_db::models::user::{CreateUser, User};
use atelier_db::repositories::UserRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::query::LimitParams;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Public view of a user. The password hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// POST /api/users
///
/// Create a user. Returns 201, or 409 when the username is taken.
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    let username = require_text("username", input.username.as_deref())?;
    require_text("password", input.password.as_deref())?;
    let password = input.password.as_deref().unwrap_or_default();

    validate_password_strength(password, MIN_PASSWORD_LENGTH).map_err(CoreError::Validation)?;

    if UserRepo::find_by_username(&state.pool, username).await?.is_some() {
        return Err(CoreError::Conflict(format!("Username '{username}' is already taken")).into());
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "User", id })?;

    Ok(Json(UserResponse::from(user)))
}

/// GET /api/users?limit=
pub async fn list_users(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let users: Vec<UserResponse> = UserRepo::list(&state.pool, limit)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(users))
}
