//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use gameshelf_entity::backlog::CreateBacklogEntry;
use gameshelf_entity::follower::FollowRelation;
use gameshelf_entity::game::{CreateGame, GamePlatform, UpdateGame};
use gameshelf_entity::lookup::{CreateLookup, UpdateLookup};
use gameshelf_entity::review::{CreateReview, UpdateReview};
use gameshelf_entity::user::UpdateUser;
use gameshelf_service::{ChangePassword, RegisterUser};

// ── Auth ─────────────────────────────────────────────────────

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ── Users ────────────────────────────────────────────────────

/// Registration body. Password strength is checked by the user service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 80, message = "Username must be 1-80 characters"))]
    pub username: String,
    #[validate(
        email(message = "Invalid email address"),
        length(max = 120, message = "Email must be at most 120 characters")
    )]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(max = 255))]
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub photo: Option<String>,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            bio: req.bio,
            photo: req.photo,
        }
    }
}

/// Partial profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 80, message = "Username must be 1-80 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address"), length(max = 120))]
    pub email: Option<String>,
    #[validate(length(max = 255))]
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub photo: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUser {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            bio: req.bio,
            photo: req.photo,
        }
    }
}

/// Password change body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
}

impl From<ChangePasswordRequest> for ChangePassword {
    fn from(req: ChangePasswordRequest) -> Self {
        Self {
            old_password: req.old_password,
            new_password: req.new_password,
            confirm_password: req.confirm_password,
        }
    }
}

/// Follow or unfollow body. The caller must be `follower_id`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct FollowRequest {
    pub user_id: i64,
    pub follower_id: i64,
}

impl From<FollowRequest> for FollowRelation {
    fn from(req: FollowRequest) -> Self {
        Self {
            user_id: req.user_id,
            follower_id: req.follower_id,
        }
    }
}

// ── Catalog ──────────────────────────────────────────────────

/// New game body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateGameRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: String,
    pub release_date: NaiveDate,
    pub genre_id: i64,
    pub developer_id: i64,
    pub publisher_id: i64,
    #[validate(length(max = 255))]
    pub cover_image: Option<String>,
}

impl From<CreateGameRequest> for CreateGame {
    fn from(req: CreateGameRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            release_date: req.release_date,
            genre_id: req.genre_id,
            developer_id: req.developer_id,
            publisher_id: req.publisher_id,
            cover_image: req.cover_image,
        }
    }
}

/// Partial game update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateGameRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Description must be 1-255 characters"))]
    pub description: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre_id: Option<i64>,
    pub developer_id: Option<i64>,
    pub publisher_id: Option<i64>,
    #[validate(length(max = 255))]
    pub cover_image: Option<String>,
}

impl From<UpdateGameRequest> for UpdateGame {
    fn from(req: UpdateGameRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            release_date: req.release_date,
            genre_id: req.genre_id,
            developer_id: req.developer_id,
            publisher_id: req.publisher_id,
            cover_image: req.cover_image,
        }
    }
}

/// `?title=` query for exact title lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct TitleQuery {
    pub title: String,
}

/// Body shared by all lookup tables.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LookupRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

impl From<LookupRequest> for CreateLookup {
    fn from(req: LookupRequest) -> Self {
        Self { name: req.name }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateLookupRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
}

impl From<UpdateLookupRequest> for UpdateLookup {
    fn from(req: UpdateLookupRequest) -> Self {
        Self { name: req.name }
    }
}

/// Game ↔ platform link body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct GamePlatformRequest {
    pub game_id: i64,
    pub platform_id: i64,
}

impl From<GamePlatformRequest> for GamePlatform {
    fn from(req: GamePlatformRequest) -> Self {
        Self {
            game_id: req.game_id,
            platform_id: req.platform_id,
        }
    }
}

// ── Activity ─────────────────────────────────────────────────

/// New review body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReviewRequest {
    pub game_id: i64,
    pub user_id: i64,
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: i32,
    pub status_id: i64,
    #[serde(default)]
    pub mastered: bool,
    pub review: Option<String>,
}

impl From<CreateReviewRequest> for CreateReview {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            game_id: req.game_id,
            user_id: req.user_id,
            score: req.score,
            status_id: req.status_id,
            mastered: req.mastered,
            review: req.review,
        }
    }
}

/// Partial review update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 10, message = "Score must be between 1 and 10"))]
    pub score: Option<i32>,
    pub status_id: Option<i64>,
    pub mastered: Option<bool>,
    pub review: Option<String>,
}

impl From<UpdateReviewRequest> for UpdateReview {
    fn from(req: UpdateReviewRequest) -> Self {
        Self {
            score: req.score,
            status_id: req.status_id,
            mastered: req.mastered,
            review: req.review,
        }
    }
}

/// New backlog entry body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct CreateBacklogRequest {
    pub user_id: i64,
    pub game_id: i64,
}

impl From<CreateBacklogRequest> for CreateBacklogEntry {
    fn from(req: CreateBacklogRequest) -> Self {
        Self {
            user_id: req.user_id,
            game_id: req.game_id,
        }
    }
}
