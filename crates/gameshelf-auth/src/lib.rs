//! # gameshelf-auth
//!
//! Credential handling for GameShelf.
//!
//! ## Modules
//!
//! - `jwt`: access and refresh token creation and validation
//! - `password`: Argon2id password hashing and policy enforcement

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::{PasswordHasher, PasswordValidator};
