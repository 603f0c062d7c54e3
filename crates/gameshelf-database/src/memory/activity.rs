//! Reviews and backlogs.

use async_trait::async_trait;
use chrono::Utc;

use gameshelf_core::result::AppResult;
use gameshelf_core::traits::Repository;
use gameshelf_entity::backlog::{BacklogEntry, CreateBacklogEntry};
use gameshelf_entity::lookup::LookupKind;
use gameshelf_entity::review::{CreateReview, UpdateReview, UserReview, is_valid_score};

use super::MemoryStore;
use crate::error::{check_violation, constraint, missing_reference, unique_violation};
use crate::store::{BacklogStore, ReviewStore};

#[async_trait]
impl Repository<UserReview, CreateReview, UpdateReview> for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<UserReview>> {
        Ok(self.tables.read().await.reviews.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<UserReview>> {
        Ok(self.tables.read().await.reviews.values().cloned().collect())
    }

    async fn create(&self, data: &CreateReview) -> AppResult<UserReview> {
        if !is_valid_score(data.score) {
            return Err(check_violation(constraint::REVIEWS_SCORE));
        }

        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&data.user_id)
            || !tables.games.contains_key(&data.game_id)
            || !tables.lookup_exists(LookupKind::GameStatus, data.status_id)
        {
            return Err(missing_reference("User review"));
        }
        if tables
            .reviews
            .values()
            .any(|r| r.user_id == data.user_id && r.game_id == data.game_id)
        {
            return Err(unique_violation(constraint::REVIEWS_USER_GAME));
        }

        let now = Utc::now();
        let review = UserReview {
            id: tables.next_id("user_reviews"),
            game_id: data.game_id,
            user_id: data.user_id,
            score: data.score,
            status_id: data.status_id,
            mastered: data.mastered,
            review: data.review.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.reviews.insert(review.id, review.clone());
        Ok(review)
    }

    async fn update(&self, id: i64, data: &UpdateReview) -> AppResult<Option<UserReview>> {
        if data.score.is_some_and(|s| !is_valid_score(s)) {
            return Err(check_violation(constraint::REVIEWS_SCORE));
        }

        let mut tables = self.tables.write().await;
        if let Some(status_id) = data.status_id {
            if tables.reviews.contains_key(&id)
                && !tables.lookup_exists(LookupKind::GameStatus, status_id)
            {
                return Err(missing_reference("User review"));
            }
        }

        let Some(review) = tables.reviews.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(score) = data.score {
            review.score = score;
        }
        if let Some(status_id) = data.status_id {
            review.status_id = status_id;
        }
        if let Some(mastered) = data.mastered {
            review.mastered = mastered;
        }
        if let Some(text) = &data.review {
            review.review = Some(text.clone());
        }
        review.updated_at = Utc::now();
        Ok(Some(review.clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.reviews.remove(&id).is_some())
    }
}

#[async_trait]
impl ReviewStore for MemoryStore {
    async fn find_by_user_and_game(
        &self,
        user_id: i64,
        game_id: i64,
    ) -> AppResult<Option<UserReview>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .find(|r| r.user_id == user_id && r.game_id == game_id)
            .cloned())
    }

    async fn find_by_game(&self, game_id: i64) -> AppResult<Vec<UserReview>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .filter(|r| r.game_id == game_id)
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<UserReview>> {
        let tables = self.tables.read().await;
        Ok(tables
            .reviews
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BacklogStore for MemoryStore {
    async fn create(&self, data: &CreateBacklogEntry) -> AppResult<BacklogEntry> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&data.user_id) || !tables.games.contains_key(&data.game_id)
        {
            return Err(missing_reference("Backlog entry"));
        }
        if tables
            .backlogs
            .values()
            .any(|b| b.user_id == data.user_id && b.game_id == data.game_id)
        {
            return Err(unique_violation(constraint::BACKLOGS_USER_GAME));
        }

        let entry = BacklogEntry {
            id: tables.next_id("user_backlogs"),
            user_id: data.user_id,
            game_id: data.game_id,
            created_at: Utc::now(),
        };
        tables.backlogs.insert(entry.id, entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<BacklogEntry>> {
        Ok(self.tables.read().await.backlogs.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<BacklogEntry>> {
        Ok(self.tables.read().await.backlogs.values().cloned().collect())
    }

    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<BacklogEntry>> {
        let tables = self.tables.read().await;
        Ok(tables
            .backlogs
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_entry(&self, user_id: i64, game_id: i64) -> AppResult<Option<BacklogEntry>> {
        let tables = self.tables.read().await;
        Ok(tables
            .backlogs
            .values()
            .find(|b| b.user_id == user_id && b.game_id == game_id)
            .cloned())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.tables.write().await.backlogs.remove(&id).is_some())
    }
}
