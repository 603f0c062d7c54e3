//! User review repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gameshelf_core::result::AppResult;
use gameshelf_core::traits::Repository;
use gameshelf_entity::review::{CreateReview, UpdateReview, UserReview};

use crate::error::{delete_error, query_error, write_error};
use crate::store::ReviewStore;

/// Repository for user reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<UserReview, CreateReview, UpdateReview> for ReviewRepository {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<UserReview>> {
        sqlx::query_as::<_, UserReview>("SELECT * FROM user_reviews WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_error(e, "find review by id"))
    }

    async fn find_all(&self) -> AppResult<Vec<UserReview>> {
        sqlx::query_as::<_, UserReview>("SELECT * FROM user_reviews ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_error(e, "list reviews"))
    }

    async fn create(&self, data: &CreateReview) -> AppResult<UserReview> {
        sqlx::query_as::<_, UserReview>(
            r#"INSERT INTO user_reviews (game_id, user_id, score, status_id, mastered, review)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING *"#,
        )
        .bind(data.game_id)
        .bind(data.user_id)
        .bind(data.score)
        .bind(data.status_id)
        .bind(data.mastered)
        .bind(&data.review)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "User review"))
    }

    async fn update(&self, id: i64, data: &UpdateReview) -> AppResult<Option<UserReview>> {
        sqlx::query_as::<_, UserReview>(
            r#"UPDATE user_reviews SET
                score = COALESCE($2, score),
                status_id = COALESCE($3, status_id),
                mastered = COALESCE($4, mastered),
                review = COALESCE($5, review),
                updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(data.score)
        .bind(data.status_id)
        .bind(data.mastered)
        .bind(&data.review)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, "User review"))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM user_reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error(e, "User review"))?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ReviewStore for ReviewRepository {
    async fn find_by_user_and_game(
        &self,
        user_id: i64,
        game_id: i64,
    ) -> AppResult<Option<UserReview>> {
        sqlx::query_as::<_, UserReview>(
            "SELECT * FROM user_reviews WHERE user_id = $1 AND game_id = $2",
        )
        .bind(user_id)
        .bind(game_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error(e, "find review by user and game"))
    }

    async fn find_by_game(&self, game_id: i64) -> AppResult<Vec<UserReview>> {
        sqlx::query_as::<_, UserReview>(
            "SELECT * FROM user_reviews WHERE game_id = $1 ORDER BY id",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error(e, "list reviews by game"))
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<UserReview>> {
        sqlx::query_as::<_, UserReview>(
            "SELECT * FROM user_reviews WHERE user_id = $1 ORDER BY id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error(e, "list reviews by user"))
    }
}
