//! PostgreSQL implementations of the store traits.

pub mod backlog;
pub mod follower;
pub mod game;
pub mod game_platform;
pub mod lookup;
pub mod review;
pub mod user;

pub use backlog::BacklogRepository;
pub use follower::FollowerRepository;
pub use game::GameRepository;
pub use game_platform::GamePlatformRepository;
pub use lookup::LookupRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;
