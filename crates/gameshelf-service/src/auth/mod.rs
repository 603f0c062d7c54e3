//! Login and token exchange.

pub mod service;

pub use service::{AccessToken, AuthService};
