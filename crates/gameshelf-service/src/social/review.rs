//! User reviews.

use std::sync::Arc;

use tracing::info;

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::ReviewStore;
use gameshelf_entity::review::{CreateReview, UpdateReview, UserReview};

use crate::context::RequestContext;

/// Handles reviews. Only the author may write, edit, or delete one.
#[derive(Debug, Clone)]
pub struct ReviewService {
    reviews: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewStore>) -> Self {
        Self { reviews }
    }

    /// Writes the caller's review of a game. One review per user and game.
    pub async fn create(&self, ctx: &RequestContext, data: CreateReview) -> AppResult<UserReview> {
        ctx.require_owner(data.user_id, "You can only write reviews as yourself")?;

        if self
            .reviews
            .find_by_user_and_game(data.user_id, data.game_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("User review already exists"));
        }

        let review = self.reviews.create(&data).await?;
        info!(
            review_id = review.id,
            user_id = review.user_id,
            game_id = review.game_id,
            score = review.score,
            "Review created"
        );
        Ok(review)
    }

    pub async fn get(&self, id: i64) -> AppResult<UserReview> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User review not found"))
    }

    pub async fn list(&self) -> AppResult<Vec<UserReview>> {
        self.reviews.find_all().await
    }

    pub async fn list_by_game(&self, game_id: i64) -> AppResult<Vec<UserReview>> {
        self.reviews.find_by_game(game_id).await
    }

    pub async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<UserReview>> {
        self.reviews.find_by_user(user_id).await
    }

    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        data: UpdateReview,
    ) -> AppResult<UserReview> {
        let review = self.get(id).await?;
        ctx.require_owner(review.user_id, "You can only edit your own reviews")?;

        let updated = self
            .reviews
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("User review not found"))?;
        info!(review_id = id, user_id = ctx.user_id, "Review updated");
        Ok(updated)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let review = self.get(id).await?;
        ctx.require_owner(review.user_id, "You can only delete your own reviews")?;

        if !self.reviews.delete(id).await? {
            return Err(AppError::not_found("User review not found"));
        }
        info!(review_id = id, user_id = ctx.user_id, "Review deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gameshelf_core::error::ErrorKind;
    use gameshelf_database::Repositories;

    use super::*;
    use crate::testing::{ctx, game, register, status};

    async fn fixture() -> (Repositories, ReviewService, CreateReview, RequestContext) {
        let repos = Repositories::in_memory();
        let user = register(&repos, "gaby").await;
        let played = game(&repos, "Outer Wilds").await;
        let completed = status(&repos, "Completed").await;
        let service = ReviewService::new(repos.reviews.clone());
        let input = CreateReview {
            game_id: played.id,
            user_id: user.id,
            score: 10,
            status_id: completed.id,
            mastered: true,
            review: Some("Perfect".to_string()),
        };
        (repos, service, input, ctx(&user))
    }

    #[tokio::test]
    async fn test_second_review_is_conflict() {
        let (_repos, service, input, caller) = fixture().await;

        service.create(&caller, input.clone()).await.unwrap();
        let err = service.create(&caller, input).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.message, "User review already exists");
    }

    #[tokio::test]
    async fn test_reviews_are_author_only() {
        let (repos, service, input, caller) = fixture().await;
        let other = ctx(&register(&repos, "felipe").await);

        let err = service.create(&other, input.clone()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let review = service.create(&caller, input).await.unwrap();
        let patch = UpdateReview {
            score: Some(1),
            ..Default::default()
        };
        let err = service
            .update(&other, review.id, patch.clone())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        let err = service.delete(&other, review.id).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);

        let updated = service.update(&caller, review.id, patch).await.unwrap();
        assert_eq!(updated.score, 1);
        assert!(updated.mastered);

        service.delete(&caller, review.id).await.unwrap();
        assert!(service.get(review.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_out_of_range_score_is_rejected() {
        let (_repos, service, mut input, caller) = fixture().await;
        input.score = 0;

        let err = service.create(&caller, input).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn test_list_by_game_and_user() {
        let (_repos, service, input, caller) = fixture().await;
        let review = service.create(&caller, input.clone()).await.unwrap();

        assert_eq!(service.list_by_game(input.game_id).await.unwrap(), vec![review.clone()]);
        assert_eq!(service.list_by_user(input.user_id).await.unwrap(), vec![review]);
        assert!(service.list_by_user(999).await.unwrap().is_empty());
    }
}
