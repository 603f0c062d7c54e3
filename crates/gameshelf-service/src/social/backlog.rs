//! User backlogs.

use std::sync::Arc;

use tracing::info;

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::BacklogStore;
use gameshelf_entity::backlog::{BacklogEntry, CreateBacklogEntry};

use crate::context::RequestContext;

/// Handles backlogs. Users manage only their own.
#[derive(Debug, Clone)]
pub struct BacklogService {
    backlogs: Arc<dyn BacklogStore>,
}

impl BacklogService {
    pub fn new(backlogs: Arc<dyn BacklogStore>) -> Self {
        Self { backlogs }
    }

    /// Adds a game to the caller's backlog.
    pub async fn add(&self, ctx: &RequestContext, data: CreateBacklogEntry) -> AppResult<BacklogEntry> {
        ctx.require_owner(data.user_id, "You can only add to your own backlog")?;

        if self
            .backlogs
            .find_entry(data.user_id, data.game_id)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("Game is already in the backlog"));
        }

        let entry = self.backlogs.create(&data).await?;
        info!(entry_id = entry.id, user_id = entry.user_id, game_id = entry.game_id, "Backlog entry added");
        Ok(entry)
    }

    pub async fn get(&self, id: i64) -> AppResult<BacklogEntry> {
        self.backlogs
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Backlog entry not found"))
    }

    pub async fn list(&self) -> AppResult<Vec<BacklogEntry>> {
        self.backlogs.find_all().await
    }

    pub async fn list_by_user(&self, user_id: i64) -> AppResult<Vec<BacklogEntry>> {
        self.backlogs.find_by_user(user_id).await
    }

    /// The entry for a user and game.
    pub async fn get_entry(&self, user_id: i64, game_id: i64) -> AppResult<BacklogEntry> {
        self.backlogs
            .find_entry(user_id, game_id)
            .await?
            .ok_or_else(|| AppError::not_found("Backlog entry not found"))
    }

    /// Removes an entry from the caller's backlog.
    pub async fn remove(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        let entry = self.get(id).await?;
        ctx.require_owner(entry.user_id, "You can only remove from your own backlog")?;

        if !self.backlogs.delete(id).await? {
            return Err(AppError::not_found("Backlog entry not found"));
        }
        info!(entry_id = id, user_id = ctx.user_id, "Backlog entry removed");
        Ok(())
    }
}
