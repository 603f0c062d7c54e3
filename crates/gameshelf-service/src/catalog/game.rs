//! Game catalog service.

use std::sync::Arc;

use tracing::info;

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::GameStore;
use gameshelf_entity::game::{CreateGame, Game, UpdateGame};

use crate::context::RequestContext;

/// Handles games. Mutations are open to any authenticated user.
#[derive(Debug, Clone)]
pub struct GameService {
    games: Arc<dyn GameStore>,
}

impl GameService {
    /// Creates a new game service.
    pub fn new(games: Arc<dyn GameStore>) -> Self {
        Self { games }
    }

    /// Adds a game. Titles are unique.
    pub async fn create(&self, ctx: &RequestContext, data: CreateGame) -> AppResult<Game> {
        if self.games.find_by_title(&data.title).await?.is_some() {
            return Err(AppError::conflict("Game title already exists"));
        }

        let game = self.games.create(&data).await?;
        info!(game_id = game.id, user_id = ctx.user_id, title = %game.title, "Game created");
        Ok(game)
    }

    /// Gets a game by ID.
    pub async fn get(&self, id: i64) -> AppResult<Game> {
        self.games
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Game not found"))
    }

    /// Gets a game by exact title.
    pub async fn find_by_title(&self, title: &str) -> AppResult<Game> {
        self.games
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::not_found("Game not found"))
    }

    /// Lists every game.
    pub async fn list(&self) -> AppResult<Vec<Game>> {
        self.games.find_all().await
    }

    /// Merges the present fields into a game.
    pub async fn update(&self, ctx: &RequestContext, id: i64, data: UpdateGame) -> AppResult<Game> {
        let game = self
            .games
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("Game not found"))?;

        info!(game_id = id, user_id = ctx.user_id, "Game updated");
        Ok(game)
    }

    /// Deletes a game with its reviews, backlog entries, and platform links.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.games.delete(id).await? {
            return Err(AppError::not_found("Game not found"));
        }

        info!(game_id = id, user_id = ctx.user_id, "Game deleted");
        Ok(())
    }
}
