//! Game entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Game {
    /// Unique game identifier.
    pub id: i64,
    /// Unique title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// First release date.
    pub release_date: NaiveDate,
    /// Genre reference.
    pub genre_id: i64,
    /// Developer reference.
    pub developer_id: i64,
    /// Publisher reference.
    pub publisher_id: i64,
    /// Cover image URL.
    pub cover_image: Option<String>,
    /// When the game was added.
    pub created_at: DateTime<Utc>,
    /// When the game was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to add a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGame {
    /// Title.
    pub title: String,
    /// Description.
    pub description: String,
    /// Release date.
    pub release_date: NaiveDate,
    /// Genre reference.
    pub genre_id: i64,
    /// Developer reference.
    pub developer_id: i64,
    /// Publisher reference.
    pub publisher_id: i64,
    /// Cover image URL.
    pub cover_image: Option<String>,
}

/// Partial update of a game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGame {
    pub title: Option<String>,
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre_id: Option<i64>,
    pub developer_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub cover_image: Option<String>,
}
