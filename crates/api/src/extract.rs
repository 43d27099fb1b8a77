//! Request extractors whose rejections use the `{message, code}` error body.
//!
//! Axum's stock `Json`, `Query` and `Path` reject with plain text; these
//! wrappers route the rejection through [`AppError::BadRequest`] instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body. Malformed JSON, a wrong field type or a missing
/// `Content-Type: application/json` all become a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Query string, e.g. `?limit=`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Path parameters, e.g. `/users/{id}`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
