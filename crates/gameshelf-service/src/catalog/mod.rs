//! Catalog services: games, the lookup tables, and platform availability.

pub mod game;
pub mod game_platform;
pub mod lookup;

pub use game::GameService;
pub use game_platform::GamePlatformService;
pub use lookup::LookupService;
