//! User activity services: reviews, backlogs, and follower relations.

pub mod backlog;
pub mod follower;
pub mod review;

pub use backlog::BacklogService;
pub use follower::FollowerService;
pub use review::ReviewService;
