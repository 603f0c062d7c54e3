//! Store selection.
//!
//! [`Database`] opens the backend named in the configuration and hands out
//! a [`Repositories`] bundle of trait objects, so the layers above never
//! see which backend is in use.

use std::sync::Arc;

use tracing::info;

use gameshelf_core::config::{DatabaseBackend, DatabaseConfig};
use gameshelf_core::result::AppResult;
use gameshelf_entity::lookup::{Developer, GameStatus, Genre, Platform, Publisher};

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::migration::run_migrations;
use crate::repositories::{
    BacklogRepository, FollowerRepository, GamePlatformRepository, GameRepository,
    LookupRepository, ReviewRepository, UserRepository,
};
use crate::store::{
    BacklogStore, FollowerStore, GamePlatformStore, GameStore, LookupStore, ReviewStore,
    UserStore,
};

/// An open store backend.
#[derive(Debug, Clone)]
pub enum Database {
    /// PostgreSQL pool.
    Postgres(DatabasePool),
    /// Process-local store.
    Memory(Arc<MemoryStore>),
}

impl Database {
    /// Open the backend selected by `config.backend`.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        match config.backend {
            DatabaseBackend::Postgres => Ok(Self::Postgres(DatabasePool::connect(config).await?)),
            DatabaseBackend::Memory => {
                info!("Using in-memory store; data will not survive a restart");
                Ok(Self::memory())
            }
        }
    }

    /// A fresh, empty in-memory backend.
    pub fn memory() -> Self {
        Self::Memory(Arc::new(MemoryStore::new()))
    }

    /// Short backend name for logs and health output.
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }

    /// Build the repository bundle over this backend.
    pub fn repositories(&self) -> Repositories {
        match self {
            Self::Postgres(db) => {
                let pool = db.pool().clone();
                Repositories {
                    users: Arc::new(UserRepository::new(pool.clone())),
                    games: Arc::new(GameRepository::new(pool.clone())),
                    genres: Arc::new(LookupRepository::<Genre>::new(pool.clone())),
                    platforms: Arc::new(LookupRepository::<Platform>::new(pool.clone())),
                    publishers: Arc::new(LookupRepository::<Publisher>::new(pool.clone())),
                    developers: Arc::new(LookupRepository::<Developer>::new(pool.clone())),
                    game_statuses: Arc::new(LookupRepository::<GameStatus>::new(pool.clone())),
                    reviews: Arc::new(ReviewRepository::new(pool.clone())),
                    backlogs: Arc::new(BacklogRepository::new(pool.clone())),
                    followers: Arc::new(FollowerRepository::new(pool.clone())),
                    game_platforms: Arc::new(GamePlatformRepository::new(pool)),
                }
            }
            Self::Memory(store) => Repositories {
                users: store.clone(),
                games: store.clone(),
                genres: store.clone(),
                platforms: store.clone(),
                publishers: store.clone(),
                developers: store.clone(),
                game_statuses: store.clone(),
                reviews: store.clone(),
                backlogs: store.clone(),
                followers: store.clone(),
                game_platforms: store.clone(),
            },
        }
    }

    /// Apply pending migrations. The in-memory store has no schema.
    pub async fn migrate(&self) -> AppResult<()> {
        match self {
            Self::Postgres(db) => run_migrations(db.pool()).await,
            Self::Memory(_) => Ok(()),
        }
    }

    /// Check that the backend is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        match self {
            Self::Postgres(db) => db.health_check().await,
            Self::Memory(_) => Ok(true),
        }
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Self::Postgres(db) = self {
            db.close().await;
        }
    }
}

/// One store handle per resource.
#[derive(Debug, Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserStore>,
    pub games: Arc<dyn GameStore>,
    pub genres: Arc<dyn LookupStore<Genre>>,
    pub platforms: Arc<dyn LookupStore<Platform>>,
    pub publishers: Arc<dyn LookupStore<Publisher>>,
    pub developers: Arc<dyn LookupStore<Developer>>,
    pub game_statuses: Arc<dyn LookupStore<GameStatus>>,
    pub reviews: Arc<dyn ReviewStore>,
    pub backlogs: Arc<dyn BacklogStore>,
    pub followers: Arc<dyn FollowerStore>,
    pub game_platforms: Arc<dyn GamePlatformStore>,
}

impl Repositories {
    /// Bundle backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Database::memory().repositories()
    }
}
