//! Game ↔ platform availability.

use std::sync::Arc;

use tracing::info;

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::GamePlatformStore;
use gameshelf_entity::game::{Game, GamePlatform};
use gameshelf_entity::lookup::Platform;

use crate::context::RequestContext;

#[derive(Debug, Clone)]
pub struct GamePlatformService {
    links: Arc<dyn GamePlatformStore>,
}

impl GamePlatformService {
    pub fn new(links: Arc<dyn GamePlatformStore>) -> Self {
        Self { links }
    }

    /// Marks a game as available on a platform.
    pub async fn link(&self, ctx: &RequestContext, link: GamePlatform) -> AppResult<GamePlatform> {
        if self.links.find(&link).await?.is_some() {
            return Err(AppError::conflict("Game platform already exists"));
        }

        let created = self.links.link(&link).await?;
        info!(
            game_id = link.game_id,
            platform_id = link.platform_id,
            user_id = ctx.user_id,
            "Game platform linked"
        );
        Ok(created)
    }

    pub async fn unlink(&self, ctx: &RequestContext, link: GamePlatform) -> AppResult<()> {
        if !self.links.unlink(&link).await? {
            return Err(AppError::not_found("Game platform not found"));
        }
        info!(
            game_id = link.game_id,
            platform_id = link.platform_id,
            user_id = ctx.user_id,
            "Game platform unlinked"
        );
        Ok(())
    }

    pub async fn platforms_for_game(&self, game_id: i64) -> AppResult<Vec<Platform>> {
        self.links.platforms_for_game(game_id).await
    }

    pub async fn games_for_platform(&self, platform_id: i64) -> AppResult<Vec<Game>> {
        self.links.games_for_platform(platform_id).await
    }
}
