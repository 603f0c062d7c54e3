//! Game ↔ platform availability link.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game being available on a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct GamePlatform {
    pub game_id: i64,
    pub platform_id: i64,
}
