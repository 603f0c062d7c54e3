//! Follower relation repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gameshelf_core::result::AppResult;
use gameshelf_entity::follower::{FollowRelation, Follower};
use gameshelf_entity::user::User;

use crate::error::{delete_error, query_error, write_error};
use crate::store::FollowerStore;

/// Repository for the `followers` edge table.
#[derive(Debug, Clone)]
pub struct FollowerRepository {
    pool: PgPool,
}

impl FollowerRepository {
    /// Create a new follower repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowerStore for FollowerRepository {
    async fn follow(&self, relation: &FollowRelation) -> AppResult<Follower> {
        sqlx::query_as::<_, Follower>(
            "INSERT INTO followers (user_id, follower_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(relation.user_id)
        .bind(relation.follower_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "Follower"))
    }

    async fn find(&self, relation: &FollowRelation) -> AppResult<Option<Follower>> {
        sqlx::query_as::<_, Follower>(
            "SELECT * FROM followers WHERE user_id = $1 AND follower_id = $2",
        )
        .bind(relation.user_id)
        .bind(relation.follower_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| query_error(e, "find follower relation"))
    }

    async fn unfollow(&self, relation: &FollowRelation) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM followers WHERE user_id = $1 AND follower_id = $2")
            .bind(relation.user_id)
            .bind(relation.follower_id)
            .execute(&self.pool)
            .await
            .map_err(|e| delete_error(e, "Follower"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn followers_of(&self, user_id: i64) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"SELECT u.* FROM users u
               JOIN followers f ON f.follower_id = u.id
               WHERE f.user_id = $1
               ORDER BY u.id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error(e, "list followers"))
    }

    async fn following_of(&self, follower_id: i64) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"SELECT u.* FROM users u
               JOIN followers f ON f.user_id = u.id
               WHERE f.follower_id = $1
               ORDER BY u.id"#,
        )
        .bind(follower_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_error(e, "list followed users"))
    }
}
