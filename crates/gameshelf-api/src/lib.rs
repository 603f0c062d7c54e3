//! # gameshelf-api
//!
//! HTTP API for GameShelf, built on Axum.
//!
//! Routes live under `/api/v1`. Handlers translate JSON payloads into
//! service calls and wrap results in [`dto::response::ApiResponse`];
//! errors are rendered by the `IntoResponse` impl in [`error`].

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
