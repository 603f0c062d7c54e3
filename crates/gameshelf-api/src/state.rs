//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use gameshelf_auth::jwt::{JwtDecoder, JwtEncoder};
use gameshelf_auth::password::{PasswordHasher, PasswordValidator};
use gameshelf_core::config::AppConfig;
use gameshelf_database::Database;
use gameshelf_entity::lookup::{Developer, GameStatus, Genre, Platform, Publisher};
use gameshelf_service::{
    AuthService, BacklogService, FollowerService, GamePlatformService, GameService,
    LookupService, ReviewService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped or hold `Arc`s, so cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// Open store backend
    pub database: Database,

    // ── Auth ─────────────────────────────────────────────────
    pub jwt_decoder: Arc<JwtDecoder>,
    pub auth_service: Arc<AuthService>,

    // ── Accounts ─────────────────────────────────────────────
    pub user_service: Arc<UserService>,
    pub follower_service: Arc<FollowerService>,

    // ── Catalog ──────────────────────────────────────────────
    pub game_service: Arc<GameService>,
    pub game_platform_service: Arc<GamePlatformService>,
    pub genre_service: Arc<LookupService<Genre>>,
    pub platform_service: Arc<LookupService<Platform>>,
    pub publisher_service: Arc<LookupService<Publisher>>,
    pub developer_service: Arc<LookupService<Developer>>,
    pub game_status_service: Arc<LookupService<GameStatus>>,

    // ── Activity ─────────────────────────────────────────────
    pub review_service: Arc<ReviewService>,
    pub backlog_service: Arc<BacklogService>,
}

impl AppState {
    /// Wires every service over the given backend.
    pub fn new(config: AppConfig, database: Database) -> Self {
        let repos = database.repositories();

        let hasher = Arc::new(PasswordHasher::new());
        let validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            repos.users.clone(),
            Arc::clone(&hasher),
            jwt_encoder,
            Arc::clone(&jwt_decoder),
        ));
        let user_service = Arc::new(UserService::new(repos.users.clone(), hasher, validator));
        let follower_service = Arc::new(FollowerService::new(
            repos.followers.clone(),
            repos.users.clone(),
        ));

        Self {
            config: Arc::new(config),
            database,
            jwt_decoder,
            auth_service,
            user_service,
            follower_service,
            game_service: Arc::new(GameService::new(repos.games.clone())),
            game_platform_service: Arc::new(GamePlatformService::new(repos.game_platforms.clone())),
            genre_service: Arc::new(LookupService::new(repos.genres.clone())),
            platform_service: Arc::new(LookupService::new(repos.platforms.clone())),
            publisher_service: Arc::new(LookupService::new(repos.publishers.clone())),
            developer_service: Arc::new(LookupService::new(repos.developers.clone())),
            game_status_service: Arc::new(LookupService::new(repos.game_statuses.clone())),
            review_service: Arc::new(ReviewService::new(repos.reviews.clone())),
            backlog_service: Arc::new(BacklogService::new(repos.backlogs)),
        }
    }
}
