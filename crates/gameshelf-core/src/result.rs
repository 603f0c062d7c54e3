//! Convenience result type alias for GameShelf.

use crate::error::AppError;

/// A specialized `Result` type for GameShelf operations.
pub type AppResult<T> = Result<T, AppError>;
