//! HTTP request handlers, one module per resource.

pub mod auth;
pub mod backlog;
pub mod follower;
pub mod game;
pub mod game_platform;
pub mod health;
pub mod lookup;
pub mod review;
pub mod user;
