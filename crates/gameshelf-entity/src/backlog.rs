//! User backlog entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game a user intends to play.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BacklogEntry {
    pub id: i64,
    pub user_id: i64,
    pub game_id: i64,
    /// When the game was added to the backlog.
    pub created_at: DateTime<Utc>,
}

/// Data required to add a game to a user's backlog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBacklogEntry {
    pub user_id: i64,
    pub game_id: i64,
}
