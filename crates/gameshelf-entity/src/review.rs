//! User review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Lowest accepted review score.
pub const MIN_SCORE: i32 = 1;
/// Highest accepted review score.
pub const MAX_SCORE: i32 = 10;

/// Returns `true` if `score` lies within `[MIN_SCORE, MAX_SCORE]`.
pub fn is_valid_score(score: i32) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// A user's review of a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserReview {
    /// Unique review identifier.
    pub id: i64,
    /// Reviewed game.
    pub game_id: i64,
    /// Author.
    pub user_id: i64,
    /// Score between 1 and 10.
    pub score: i32,
    /// Play status at the time of review.
    pub status_id: i64,
    /// Whether the author has mastered the game.
    pub mastered: bool,
    /// Review text.
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    pub game_id: i64,
    pub user_id: i64,
    pub score: i32,
    pub status_id: i64,
    pub mastered: bool,
    pub review: Option<String>,
}

/// Partial update of a review. Game and author are fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReview {
    pub score: Option<i32>,
    pub status_id: Option<i64>,
    pub mastered: Option<bool>,
    pub review: Option<String>,
}
