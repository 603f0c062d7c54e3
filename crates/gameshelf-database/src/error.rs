//! Classification of store errors into [`AppError`]s.
//!
//! Both store implementations report constraint failures through these
//! helpers so that callers see identical errors regardless of backend.

use sqlx::error::ErrorKind as SqlxErrorKind;

use gameshelf_core::error::{AppError, ErrorKind};

/// Constraint names shared by the migrations and the in-memory store.
pub mod constraint {
    pub const USERS_USERNAME: &str = "users_username_key";
    pub const USERS_EMAIL: &str = "users_email_key";
    pub const GAMES_TITLE: &str = "games_title_key";
    pub const REVIEWS_USER_GAME: &str = "user_reviews_user_game_key";
    pub const REVIEWS_SCORE: &str = "user_reviews_score_range";
    pub const BACKLOGS_USER_GAME: &str = "user_backlogs_user_game_key";
    pub const FOLLOWERS_PKEY: &str = "followers_pkey";
    pub const FOLLOWERS_NOT_SELF: &str = "followers_not_self";
    pub const GAME_PLATFORMS_PKEY: &str = "game_platforms_pkey";
}

/// Builds the conflict error for a violated unique constraint.
pub fn unique_violation(constraint_name: &str) -> AppError {
    let message = match constraint_name {
        constraint::USERS_USERNAME => "Username already exists".to_string(),
        constraint::USERS_EMAIL => "Email already exists".to_string(),
        constraint::GAMES_TITLE => "Game title already exists".to_string(),
        constraint::REVIEWS_USER_GAME => "User review already exists".to_string(),
        constraint::BACKLOGS_USER_GAME => "Game is already in the backlog".to_string(),
        constraint::FOLLOWERS_PKEY => "Already following this user".to_string(),
        constraint::GAME_PLATFORMS_PKEY => "Game platform already exists".to_string(),
        other => match other.strip_suffix("_name_key") {
            Some(table) => format!("{} name already exists", singular_label(table)),
            None => format!("Duplicate value violates '{other}'"),
        },
    };
    AppError::conflict(message)
}

/// Builds the validation error for a violated check constraint.
pub fn check_violation(constraint_name: &str) -> AppError {
    match constraint_name {
        constraint::REVIEWS_SCORE => AppError::validation("Score must be between 1 and 10"),
        constraint::FOLLOWERS_NOT_SELF => AppError::validation("Users cannot follow themselves"),
        other => AppError::validation(format!("Value violates '{other}'")),
    }
}

/// A write referenced a row that does not exist.
pub fn missing_reference(what: &str) -> AppError {
    AppError::validation(format!("{what} references a record that does not exist"))
}

/// A delete was refused because other rows still reference the target.
pub fn still_referenced(what: &str) -> AppError {
    AppError::conflict(format!("{what} is still referenced by other records"))
}

/// Maps an error raised by an INSERT or UPDATE.
pub fn write_error(err: sqlx::Error, what: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        let name = db_err.constraint().unwrap_or_default().to_string();
        match db_err.kind() {
            SqlxErrorKind::UniqueViolation => return unique_violation(&name),
            SqlxErrorKind::ForeignKeyViolation => return missing_reference(what),
            SqlxErrorKind::CheckViolation => return check_violation(&name),
            _ => {}
        }
    }
    AppError::with_source(ErrorKind::Database, format!("Failed to save {what}"), err)
}

/// Maps an error raised by a DELETE.
pub fn delete_error(err: sqlx::Error, what: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if matches!(db_err.kind(), SqlxErrorKind::ForeignKeyViolation) {
            return still_referenced(what);
        }
    }
    AppError::with_source(ErrorKind::Database, format!("Failed to delete {what}"), err)
}

/// Maps an error raised by a read.
pub fn query_error(err: sqlx::Error, context: &str) -> AppError {
    AppError::with_source(ErrorKind::Database, format!("Failed to {context}"), err)
}

fn singular_label(table: &str) -> &str {
    match table {
        "genres" => "Genre",
        "platforms" => "Platform",
        "publishers" => "Publisher",
        "developers" => "Developer",
        "game_statuses" => "Game status",
        other => other,
    }
}
