//! # gameshelf-database
//!
//! Storage for GameShelf: the per-resource store traits, their PostgreSQL
//! implementations, a process-local implementation for development and
//! tests, migrations, and catalog seed data.

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod provider;
pub mod repositories;
pub mod seed;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use provider::{Database, Repositories};
