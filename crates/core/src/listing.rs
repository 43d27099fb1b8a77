//! Limits for the newest-first list endpoints.

/// Rows returned when the caller does not pass `?limit=`.
pub const DEFAULT_LIST_LIMIT: i64 = 50;
/// Hard ceiling on rows returned by a single list call.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}
