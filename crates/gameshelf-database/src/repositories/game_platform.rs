//! Game ↔ platform link repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gameshelf_core::result::AppResult;
use gameshelf_entity::game::{Game, GamePlatform};
use gameshelf_entity::lookup::Platform;

use crate::error::{delete_error, query_error, write_error};
use crate::store::GamePlatformStore;

/// Repository for the `game_platforms` join table.
#[derive(Debug, Clone)]
pub struct GamePlatformRepository {
    pool: PgPool,
}

impl GamePlatformRepository {
    /// Create a new game platform repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GamePlatformStore for GamePlatformRepository {
    async fn link(&self, link: &GamePlatform) -> AppResult<GamePlatform> {
        sqlx::query_as::<_, GamePlatform>(
            "INSERT INTO game_platforms (game_id, platform_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(link.game_id)
        .bind(link.platform_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Game platform"))
    }

    async fn find(&self, link: &GamePlatform) -> AppResult<Option<GamePlatform>> {
        sqlx::query_as::<_, GamePlatform>(
            "SELECT * FROM game_platforms WHERE game_id = $1 AND platform_id = $2",
        )
        .bind(link.game_id)
        .bind(link.platform_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error(e, "find game platform"))
    }

    async fn unlink(&self, link: &GamePlatform) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM game_platforms WHERE game_id = $1 AND platform_id = $2")
                .bind(link.game_id)
                .bind(link.platform_id)
                .execute(&self.pool)
                .await
                .map_err(|e| delete_error(e, "Game platform"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn platforms_for_game(&self, game_id: i64) -> AppResult<Vec<Platform>> {
        sqlx::query_as::<_, Platform>(
            r#"SELECT p.id, p.name FROM platforms p
               JOIN game_platforms gp ON gp.platform_id = p.id
               WHERE gp.game_id = $1
               ORDER BY p.id"#,
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error(e, "list platforms for game"))
    }

    async fn games_for_platform(&self, platform_id: i64) -> AppResult<Vec<Game>> {
        sqlx::query_as::<_, Game>(
            r#"SELECT g.* FROM games g
               JOIN game_platforms gp ON gp.game_id = g.id
               WHERE gp.platform_id = $1
               ORDER BY g.id"#,
        )
        .bind(platform_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error(e, "list games for platform"))
    }
}
