//! Core traits implemented by the storage layer.

pub mod repository;

pub use repository::Repository;
