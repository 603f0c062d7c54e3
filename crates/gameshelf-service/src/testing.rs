//! Fixtures shared by the service tests.

use std::sync::Arc;

use chrono::NaiveDate;

use gameshelf_auth::{JwtDecoder, JwtEncoder, PasswordHasher, PasswordValidator};
use gameshelf_core::config::AuthConfig;
use gameshelf_database::Repositories;
use gameshelf_entity::game::{CreateGame, Game};
use gameshelf_entity::lookup::{CreateLookup, GameStatus};
use gameshelf_entity::user::User;

use crate::context::RequestContext;
use crate::user::{RegisterUser, UserService};

pub(crate) const PASSWORD: &str = "correct horse";

pub(crate) fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "service-test-secret".to_string(),
        ..AuthConfig::default()
    }
}

pub(crate) fn user_service(repos: &Repositories) -> UserService {
    let config = auth_config();
    UserService::new(
        repos.users.clone(),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config)),
    )
}

pub(crate) fn encoder() -> Arc<JwtEncoder> {
    Arc::new(JwtEncoder::new(&auth_config()))
}

pub(crate) fn decoder() -> Arc<JwtDecoder> {
    Arc::new(JwtDecoder::new(&auth_config()))
}

pub(crate) async fn register(repos: &Repositories, username: &str) -> User {
    user_service(repos)
        .register(RegisterUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: PASSWORD.to_string(),
            bio: None,
            photo: None,
        })
        .await
        .unwrap()
}

pub(crate) fn ctx(user: &User) -> RequestContext {
    RequestContext::new(user.id, &user.username, true)
}

/// Creates a game with fresh genre, developer, and publisher rows.
pub(crate) async fn game(repos: &Repositories, title: &str) -> Game {
    let genre = repos
        .genres
        .create(&CreateLookup {
            name: format!("{title} genre"),
        })
        .await
        .unwrap();
    let developer = repos
        .developers
        .create(&CreateLookup {
            name: format!("{title} developer"),
        })
        .await
        .unwrap();
    let publisher = repos
        .publishers
        .create(&CreateLookup {
            name: format!("{title} publisher"),
        })
        .await
        .unwrap();

    repos
        .games
        .create(&CreateGame {
            title: title.to_string(),
            description: format!("About {title}"),
            release_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            genre_id: genre.id,
            developer_id: developer.id,
            publisher_id: publisher.id,
            cover_image: None,
        })
        .await
        .unwrap()
}

pub(crate) async fn status(repos: &Repositories, name: &str) -> GameStatus {
    repos
        .game_statuses
        .create(&CreateLookup {
            name: name.to_string(),
        })
        .await
        .unwrap()
}
