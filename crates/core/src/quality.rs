//! Quality score bounds and clamping.
//!
//! Scores attached to generated assets are integers in `[1, 100]`. Nothing
//! in the database enforces the range; every score that reaches storage or
//! a response passes through [`clamp_score`] first.

use crate::types::Score;

/// Lowest score an asset can carry.
pub const MIN_SCORE: Score = 1;
/// Highest score an asset can carry.
pub const MAX_SCORE: Score = 100;
/// Score used when the model omits one.
pub const DEFAULT_SCORE: Score = 85;

/// Lower bound (inclusive) of the randomly assigned image score.
pub const IMAGE_SCORE_MIN: Score = 85;
/// Upper bound (exclusive) of the randomly assigned image score.
pub const IMAGE_SCORE_MAX: Score = 100;

/// Fixed score recorded for code produced inside an orchestrated campaign.
pub const ORCHESTRATED_CODE_SCORE: Score = 90;

/// Clamp an arbitrary integer into `[MIN_SCORE, MAX_SCORE]`.
pub fn clamp_score(raw: i64) -> Score {
    raw.clamp(MIN_SCORE as i64, MAX_SCORE as i64) as Score
}

/// Resolve a model-reported score: round, clamp, or fall back to
/// [`DEFAULT_SCORE`] when absent or not a finite number.
pub fn score_or_default(reported: Option<f64>) -> Score {
    match reported {
        Some(value) if value.is_finite() => clamp_score(value.round() as i64),
        _ => DEFAULT_SCORE,
    }
}
