//! Game domain entities.

pub mod model;
pub mod platform;

pub use model::{CreateGame, Game, UpdateGame};
pub use platform::GamePlatform;
