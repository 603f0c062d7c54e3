//! User registration, profile management, and password changes.

pub mod service;

pub use service::{ChangePassword, RegisterUser, UserService};
