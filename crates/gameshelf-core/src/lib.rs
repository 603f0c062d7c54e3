//! # gameshelf-core
//!
//! Core crate for GameShelf. Contains configuration schemas, the unified
//! error system, and the generic storage trait every repository implements.
//!
//! This crate has **no** internal dependencies on other GameShelf crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
