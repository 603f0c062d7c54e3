//! Games, lookup tables and game ↔ platform links.

use async_trait::async_trait;
use chrono::Utc;

use gameshelf_core::result::AppResult;
use gameshelf_core::traits::Repository;
use gameshelf_entity::game::{CreateGame, Game, GamePlatform, UpdateGame};
use gameshelf_entity::lookup::{
    CreateLookup, LookupEntity, LookupKind, Platform, UpdateLookup,
};

use super::{MemoryStore, Tables};
use crate::error::{constraint, missing_reference, still_referenced, unique_violation};
use crate::store::{GamePlatformStore, GameStore, LookupStore};

impl Tables {
    fn check_game(&self, id: Option<i64>, game: &Game) -> AppResult<()> {
        if self
            .games
            .values()
            .any(|g| Some(g.id) != id && g.title == game.title)
        {
            return Err(unique_violation(constraint::GAMES_TITLE));
        }

        let references = [
            (LookupKind::Genre, game.genre_id),
            (LookupKind::Developer, game.developer_id),
            (LookupKind::Publisher, game.publisher_id),
        ];
        if references
            .iter()
            .any(|&(kind, ref_id)| !self.lookup_exists(kind, ref_id))
        {
            return Err(missing_reference("Game"));
        }
        Ok(())
    }

    fn check_lookup_name(&self, kind: LookupKind, id: Option<i64>, name: &str) -> AppResult<()> {
        let taken = self
            .lookup(kind)
            .is_some_and(|rows| rows.iter().any(|(&k, v)| Some(k) != id && v == name));
        if taken {
            return Err(unique_violation(&format!("{}_name_key", kind.table())));
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Game, CreateGame, UpdateGame> for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Game>> {
        Ok(self.tables.read().await.games.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Game>> {
        Ok(self.tables.read().await.games.values().cloned().collect())
    }

    async fn create(&self, data: &CreateGame) -> AppResult<Game> {
        let mut tables = self.tables.write().await;
        let now = Utc::now();
        let mut game = Game {
            id: 0,
            title: data.title.clone(),
            description: data.description.clone(),
            release_date: data.release_date,
            genre_id: data.genre_id,
            developer_id: data.developer_id,
            publisher_id: data.publisher_id,
            cover_image: data.cover_image.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.check_game(None, &game)?;

        game.id = tables.next_id("games");
        tables.games.insert(game.id, game.clone());
        Ok(game)
    }

    async fn update(&self, id: i64, data: &UpdateGame) -> AppResult<Option<Game>> {
        let mut tables = self.tables.write().await;
        let Some(current) = tables.games.get(&id) else {
            return Ok(None);
        };

        let mut game = current.clone();
        if let Some(title) = &data.title {
            game.title = title.clone();
        }
        if let Some(description) = &data.description {
            game.description = description.clone();
        }
        if let Some(release_date) = data.release_date {
            game.release_date = release_date;
        }
        if let Some(genre_id) = data.genre_id {
            game.genre_id = genre_id;
        }
        if let Some(developer_id) = data.developer_id {
            game.developer_id = developer_id;
        }
        if let Some(publisher_id) = data.publisher_id {
            game.publisher_id = publisher_id;
        }
        if let Some(cover_image) = &data.cover_image {
            game.cover_image = Some(cover_image.clone());
        }
        tables.check_game(Some(id), &game)?;

        game.updated_at = Utc::now();
        tables.games.insert(id, game.clone());
        Ok(Some(game))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if tables.games.remove(&id).is_none() {
            return Ok(false);
        }
        tables.cascade_game(id);
        Ok(true)
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Game>> {
        let tables = self.tables.read().await;
        Ok(tables.games.values().find(|g| g.title == title).cloned())
    }
}

#[async_trait]
impl<T: LookupEntity> Repository<T, CreateLookup, UpdateLookup> for MemoryStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>> {
        let tables = self.tables.read().await;
        Ok(tables
            .lookup(T::KIND)
            .and_then(|rows| rows.get(&id))
            .map(|name| T::from_parts(id, name.clone())))
    }

    async fn find_all(&self) -> AppResult<Vec<T>> {
        let tables = self.tables.read().await;
        Ok(tables
            .lookup(T::KIND)
            .map(|rows| {
                rows.iter()
                    .map(|(&id, name)| T::from_parts(id, name.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn create(&self, data: &CreateLookup) -> AppResult<T> {
        let mut tables = self.tables.write().await;
        tables.check_lookup_name(T::KIND, None, &data.name)?;

        let id = tables.next_id(T::KIND.table());
        tables.lookup_mut(T::KIND).insert(id, data.name.clone());
        Ok(T::from_parts(id, data.name.clone()))
    }

    async fn update(&self, id: i64, data: &UpdateLookup) -> AppResult<Option<T>> {
        let mut tables = self.tables.write().await;
        if !tables.lookup_exists(T::KIND, id) {
            return Ok(None);
        }
        if let Some(name) = &data.name {
            tables.check_lookup_name(T::KIND, Some(id), name)?;
            tables.lookup_mut(T::KIND).insert(id, name.clone());
        }

        Ok(tables
            .lookup(T::KIND)
            .and_then(|rows| rows.get(&id))
            .map(|name| T::from_parts(id, name.clone())))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        if !tables.lookup_exists(T::KIND, id) {
            return Ok(false);
        }
        if tables.lookup_in_use(T::KIND, id) {
            return Err(still_referenced(T::KIND.label()));
        }
        tables.lookup_mut(T::KIND).remove(&id);
        Ok(true)
    }
}

#[async_trait]
impl<T: LookupEntity> LookupStore<T> for MemoryStore {
    async fn find_by_name(&self, name: &str) -> AppResult<Option<T>> {
        let tables = self.tables.read().await;
        Ok(tables.lookup(T::KIND).and_then(|rows| {
            rows.iter()
                .find(|(_, v)| v.as_str() == name)
                .map(|(&id, v)| T::from_parts(id, v.clone()))
        }))
    }
}

#[async_trait]
impl GamePlatformStore for MemoryStore {
    async fn link(&self, link: &GamePlatform) -> AppResult<GamePlatform> {
        let mut tables = self.tables.write().await;
        if !tables.games.contains_key(&link.game_id)
            || !tables.lookup_exists(LookupKind::Platform, link.platform_id)
        {
            return Err(missing_reference("Game platform"));
        }
        if !tables.game_platforms.insert((link.game_id, link.platform_id)) {
            return Err(unique_violation(constraint::GAME_PLATFORMS_PKEY));
        }
        Ok(*link)
    }

    async fn find(&self, link: &GamePlatform) -> AppResult<Option<GamePlatform>> {
        let tables = self.tables.read().await;
        Ok(tables
            .game_platforms
            .contains(&(link.game_id, link.platform_id))
            .then_some(*link))
    }

    async fn unlink(&self, link: &GamePlatform) -> AppResult<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .game_platforms
            .remove(&(link.game_id, link.platform_id)))
    }

    async fn platforms_for_game(&self, game_id: i64) -> AppResult<Vec<Platform>> {
        let tables = self.tables.read().await;
        let Some(platforms) = tables.lookup(LookupKind::Platform) else {
            return Ok(Vec::new());
        };
        // Set is ordered by (game_id, platform_id).
        Ok(tables
            .game_platforms
            .iter()
            .filter(|&&(game, _)| game == game_id)
            .filter_map(|(_, platform_id)| {
                platforms
                    .get(platform_id)
                    .map(|name| Platform::from_parts(*platform_id, name.clone()))
            })
            .collect())
    }

    async fn games_for_platform(&self, platform_id: i64) -> AppResult<Vec<Game>> {
        let tables = self.tables.read().await;
        Ok(tables
            .game_platforms
            .iter()
            .filter(|&&(_, platform)| platform == platform_id)
            .filter_map(|(game_id, _)| tables.games.get(game_id).cloned())
            .collect())
    }
}
