//! Game repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gameshelf_core::result::AppResult;
use gameshelf_core::traits::Repository;
use gameshelf_entity::game::{CreateGame, Game, UpdateGame};

use crate::error::{delete_error, query_error, write_error};
use crate::store::GameStore;

/// Repository for games.
#[derive(Debug, Clone)]
pub struct GameRepository {
    pool: PgPool,
}

impl GameRepository {
    /// Create a new game repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Game, CreateGame, UpdateGame> for GameRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Game>> {
        sqlx::query_as::<_, Game>("SELECT * FROM games WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e, "find game by id"))
    }

    async fn find_all(&self) -> AppResult<Vec<Game>> {
        sqlx::query_as::<_, Game>("SELECT * FROM games ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(e, "list games"))
    }

    async fn create(&self, data: &CreateGame) -> AppResult<Game> {
        sqlx::query_as::<_, Game>(
            r#"INSERT INTO games
                (title, description, release_date, genre_id, developer_id, publisher_id, cover_image)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.release_date)
        .bind(data.genre_id)
        .bind(data.developer_id)
        .bind(data.publisher_id)
        .bind(&data.cover_image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Game"))
    }

    async fn update(&self, id: i64, data: &UpdateGame) -> AppResult<Option<Game>> {
        sqlx::query_as::<_, Game>(
            r#"UPDATE games SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                release_date = COALESCE($4, release_date),
                genre_id = COALESCE($5, genre_id),
                developer_id = COALESCE($6, developer_id),
                publisher_id = COALESCE($7, publisher_id),
                cover_image = COALESCE($8, cover_image),
                updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.release_date)
        .bind(data.genre_id)
        .bind(data.developer_id)
        .bind(data.publisher_id)
        .bind(&data.cover_image)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, "Game"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error(e, "Game"))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl GameStore for GameRepository {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Game>> {
        sqlx::query_as::<_, Game>("SELECT * FROM games WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e, "find game by title"))
    }
}
