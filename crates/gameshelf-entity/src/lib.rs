//! # gameshelf-entity
//!
//! Domain entity models for GameShelf. Every struct in this crate
//! represents a table row or the input used to create or update one.
//! Row types derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and
//! `sqlx::FromRow`.

pub mod backlog;
pub mod follower;
pub mod game;
pub mod lookup;
pub mod review;
pub mod user;
