//! User backlog repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gameshelf_core::result::AppResult;
use gameshelf_entity::backlog::{BacklogEntry, CreateBacklogEntry};

use crate::error::{delete_error, query_error, write_error};
use crate::store::BacklogStore;

/// Repository for backlog entries.
#[derive(Debug, Clone)]
pub struct BacklogRepository {
    pool: PgPool,
}

impl BacklogRepository {
    /// Create a new backlog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BacklogStore for BacklogRepository {
    async fn create(&self, data: &CreateBacklogEntry) -> AppResult<BacklogEntry> {
        sqlx::query_as::<_, BacklogEntry>(
            "INSERT INTO user_backlogs (user_id, game_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.game_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Backlog entry"))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<BacklogEntry>> {
        sqlx::query_as::<_, BacklogEntry>("SELECT * FROM user_backlogs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e, "find backlog entry by id"))
    }

    async fn find_all(&self) -> AppResult<Vec<BacklogEntry>> {
        sqlx::query_as::<_, BacklogEntry>("SELECT * FROM user_backlogs ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(e, "list backlog entries"))
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<BacklogEntry>> {
        sqlx::query_as::<_, BacklogEntry>(
            "SELECT * FROM user_backlogs WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error(e, "list backlog by user"))
    }

    async fn find_entry(&self, user_id: i64, game_id: i64) -> AppResult<Option<BacklogEntry>> {
        sqlx::query_as::<_, BacklogEntry>(
            "SELECT * FROM user_backlogs WHERE user_id = $1 AND game_id = $2",
        )
        .bind(user_id)
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error(e, "find backlog entry"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM user_backlogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error(e, "Backlog entry"))?;

        Ok(result.rows_affected() > 0)
    }
}
