//! Route definitions for the GameShelf HTTP API.
//!
//! All routes are organized by resource and mounted under `/api/v1`.
//! The router receives `AppState` and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use gameshelf_entity::lookup::{Developer, GameStatus, Genre, Platform, Publisher};

use crate::handlers;
use crate::handlers::lookup::LookupRoute;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(auth_routes())
        .merge(user_routes())
        .merge(game_routes())
        .merge(lookup_routes::<Genre>("genres"))
        .merge(lookup_routes::<Platform>("platforms"))
        .merge(lookup_routes::<Publisher>("publishers"))
        .merge(lookup_routes::<Developer>("developers"))
        .merge(lookup_routes::<GameStatus>("game_statuses"))
        .merge(review_routes())
        .merge(backlog_routes())
        .merge(follower_routes())
        .merge(game_platform_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Auth endpoints: login, refresh, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Registration, profiles, password change
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(handlers::user::list_users).post(handlers::user::register),
        )
        .route(
            "/users/{id}",
            get(handlers::user::get_user)
                .patch(handlers::user::update_user)
                .delete(handlers::user::delete_user),
        )
        .route("/users/{id}/password", put(handlers::user::change_password))
}

fn game_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/games",
            get(handlers::game::list_games).post(handlers::game::create_game),
        )
        .route("/games/title", get(handlers::game::get_game_by_title))
        .route(
            "/games/{id}",
            get(handlers::game::get_game)
                .patch(handlers::game::update_game)
                .delete(handlers::game::delete_game),
        )
}

/// The same five routes for every lookup table.
fn lookup_routes<T: LookupRoute>(collection: &str) -> Router<AppState> {
    Router::new()
        .route(
            &format!("/{collection}"),
            get(handlers::lookup::list::<T>).post(handlers::lookup::create::<T>),
        )
        .route(
            &format!("/{collection}/{{id}}"),
            get(handlers::lookup::get::<T>)
                .patch(handlers::lookup::update::<T>)
                .delete(handlers::lookup::delete::<T>),
        )
}

fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user_reviews",
            get(handlers::review::list_reviews).post(handlers::review::create_review),
        )
        .route(
            "/user_reviews/{id}",
            get(handlers::review::get_review)
                .patch(handlers::review::update_review)
                .delete(handlers::review::delete_review),
        )
        .route(
            "/user_reviews/game/{game_id}",
            get(handlers::review::list_by_game),
        )
        .route(
            "/user_reviews/user/{user_id}",
            get(handlers::review::list_by_user),
        )
}

fn backlog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user_backlogs",
            get(handlers::backlog::list_backlogs).post(handlers::backlog::add_to_backlog),
        )
        .route(
            "/user_backlogs/{id}",
            get(handlers::backlog::get_backlog_entry).delete(handlers::backlog::remove_from_backlog),
        )
        .route(
            "/user_backlogs/user/{user_id}",
            get(handlers::backlog::list_user_backlog),
        )
        .route(
            "/user_backlogs/user/{user_id}/game/{game_id}",
            get(handlers::backlog::get_user_game_entry),
        )
}

fn follower_routes() -> Router<AppState> {
    Router::new()
        .route("/followers/follow", post(handlers::follower::follow))
        .route("/followers/unfollow", delete(handlers::follower::unfollow))
        .route("/followers/{user_id}", get(handlers::follower::followers_of))
        .route(
            "/followers/following/{follower_id}",
            get(handlers::follower::following_of),
        )
}

fn game_platform_routes() -> Router<AppState> {
    Router::new()
        .route("/game_platforms", post(handlers::game_platform::link))
        .route(
            "/game_platforms/games/{game_id}",
            get(handlers::game_platform::platforms_for_game),
        )
        .route(
            "/game_platforms/games/{game_id}/platforms/{platform_id}",
            delete(handlers::game_platform::unlink),
        )
        .route(
            "/game_platforms/platforms/{platform_id}",
            get(handlers::game_platform::games_for_platform),
        )
}
