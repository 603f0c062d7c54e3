//! Follower relations.

use std::sync::Arc;

use tracing::info;

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::{FollowerStore, UserStore};
use gameshelf_entity::follower::{FollowRelation, Follower};
use gameshelf_entity::user::User;

use crate::context::RequestContext;

/// Handles follows. The caller always acts as the follower.
#[derive(Debug, Clone)]
pub struct FollowerService {
    followers: Arc<dyn FollowerStore>,
    users: Arc<dyn UserStore>,
}

impl FollowerService {
    pub fn new(followers: Arc<dyn FollowerStore>, users: Arc<dyn UserStore>) -> Self {
        Self { followers, users }
    }

    /// Makes the caller follow `relation.user_id`.
    pub async fn follow(&self, ctx: &RequestContext, relation: FollowRelation) -> AppResult<Follower> {
        ctx.require_owner(relation.follower_id, "You can only follow as yourself")?;
        if relation.is_self_follow() {
            return Err(AppError::validation("Users cannot follow themselves"));
        }

        if self.followers.find(&relation).await?.is_some() {
            return Err(AppError::conflict("Already following this user"));
        }
        if self.users.find_by_id(relation.user_id).await?.is_none() {
            return Err(AppError::not_found("User not found"));
        }

        let follower = self.followers.follow(&relation).await?;
        info!(user_id = relation.user_id, follower_id = relation.follower_id, "User followed");
        Ok(follower)
    }

    pub async fn unfollow(&self, ctx: &RequestContext, relation: FollowRelation) -> AppResult<()> {
        ctx.require_owner(relation.follower_id, "You can only unfollow as yourself")?;

        if !self.followers.unfollow(&relation).await? {
            return Err(AppError::not_found("Follow relation not found"));
        }
        info!(user_id = relation.user_id, follower_id = relation.follower_id, "User unfollowed");
        Ok(())
    }

    /// Users following `user_id`.
    pub async fn followers_of(&self, user_id: i64) -> AppResult<Vec<User>> {
        self.followers.followers_of(user_id).await
    }

    /// Users that `follower_id` follows.
    pub async fn following_of(&self, follower_id: i64) -> AppResult<Vec<User>> {
        self.followers.following_of(follower_id).await
    }
}
