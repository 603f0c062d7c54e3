//! Per-resource store traits.
//!
//! Services depend on these traits rather than on a concrete backend.
//! [`crate::repositories`] implements them over PostgreSQL and
//! [`crate::memory::MemoryStore`] implements all of them in process.

use std::fmt::Debug;

use async_trait::async_trait;

use gameshelf_core::result::AppResult;
use gameshelf_core::traits::Repository;
use gameshelf_entity::backlog::{BacklogEntry, CreateBacklogEntry};
use gameshelf_entity::follower::{FollowRelation, Follower};
use gameshelf_entity::game::{CreateGame, Game, GamePlatform, UpdateGame};
use gameshelf_entity::lookup::{CreateLookup, LookupEntity, Platform, UpdateLookup};
use gameshelf_entity::review::{CreateReview, UpdateReview, UserReview};
use gameshelf_entity::user::{CreateUser, UpdateUser, User};

/// User accounts.
#[async_trait]
pub trait UserStore: Repository<User, CreateUser, UpdateUser> + Debug {
    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Replace a user's password hash. Returns `false` if the user is gone.
    async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<bool>;
}

/// Games in the catalog.
#[async_trait]
pub trait GameStore: Repository<Game, CreateGame, UpdateGame> + Debug {
    /// Find a game by exact title.
    async fn find_by_title(&self, title: &str) -> AppResult<Option<Game>>;
}

/// One of the name-only lookup tables.
#[async_trait]
pub trait LookupStore<T: LookupEntity>: Repository<T, CreateLookup, UpdateLookup> + Debug {
    /// Find a row by exact name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<T>>;
}

/// User reviews.
#[async_trait]
pub trait ReviewStore: Repository<UserReview, CreateReview, UpdateReview> + Debug {
    /// The review a user wrote for a game, if any.
    async fn find_by_user_and_game(
        &self,
        user_id: i64,
        game_id: i64,
    ) -> AppResult<Option<UserReview>>;

    /// All reviews of a game.
    async fn find_by_game(&self, game_id: i64) -> AppResult<Vec<UserReview>>;

    /// All reviews written by a user.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<UserReview>>;
}

/// User backlogs. Entries are immutable once added.
#[async_trait]
pub trait BacklogStore: Send + Sync + Debug + 'static {
    async fn create(&self, data: &CreateBacklogEntry) -> AppResult<BacklogEntry>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<BacklogEntry>>;

    async fn find_all(&self) -> AppResult<Vec<BacklogEntry>>;

    /// A user's whole backlog, oldest first.
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<BacklogEntry>>;

    /// The entry for a given user and game, if any.
    async fn find_entry(&self, user_id: i64, game_id: i64) -> AppResult<Option<BacklogEntry>>;

    async fn delete(&self, id: i64) -> AppResult<bool>;
}

/// Follower relations between users.
#[async_trait]
pub trait FollowerStore: Send + Sync + Debug + 'static {
    /// Record that `relation.follower_id` follows `relation.user_id`.
    async fn follow(&self, relation: &FollowRelation) -> AppResult<Follower>;

    async fn find(&self, relation: &FollowRelation) -> AppResult<Option<Follower>>;

    /// Remove a relation. Returns `false` if it did not exist.
    async fn unfollow(&self, relation: &FollowRelation) -> AppResult<bool>;

    /// Users following `user_id`.
    async fn followers_of(&self, user_id: i64) -> AppResult<Vec<User>>;

    /// Users that `follower_id` follows.
    async fn following_of(&self, follower_id: i64) -> AppResult<Vec<User>>;
}

/// Game ↔ platform availability links.
#[async_trait]
pub trait GamePlatformStore: Send + Sync + Debug + 'static {
    async fn link(&self, link: &GamePlatform) -> AppResult<GamePlatform>;

    async fn find(&self, link: &GamePlatform) -> AppResult<Option<GamePlatform>>;

    /// Remove a link. Returns `false` if it did not exist.
    async fn unlink(&self, link: &GamePlatform) -> AppResult<bool>;

    /// Platforms a game is available on.
    async fn platforms_for_game(&self, game_id: i64) -> AppResult<Vec<Platform>>;

    /// Games available on a platform.
    async fn games_for_platform(&self, platform_id: i64) -> AppResult<Vec<Game>>;
}
