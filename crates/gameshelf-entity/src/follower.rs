//! Follower relation between two users.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A directed edge: `follower_id` follows `user_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Follower {
    /// The user being followed.
    pub user_id: i64,
    /// The user who follows.
    pub follower_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Identifies one follower relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FollowRelation {
    pub user_id: i64,
    pub follower_id: i64,
}

impl FollowRelation {
    /// A user following themself.
    pub fn is_self_follow(&self) -> bool {
        self.user_id == self.follower_id
    }
}
