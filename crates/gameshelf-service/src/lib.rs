//! # gameshelf-service
//!
//! Business logic service layer for GameShelf. Each service applies the
//! authorization rules and the existence or uniqueness check of a use
//! case, then delegates to a store.
//!
//! Services follow constructor injection: stores and credential helpers
//! are provided at construction time via `Arc` references.

pub mod auth;
pub mod catalog;
pub mod context;
pub mod social;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::{AccessToken, AuthService};
pub use catalog::{GamePlatformService, GameService, LookupService};
pub use context::RequestContext;
pub use social::{BacklogService, FollowerService, ReviewService};
pub use user::{ChangePassword, RegisterUser, UserService};
