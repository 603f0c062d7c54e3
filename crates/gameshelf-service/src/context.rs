//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;

/// Context for the current authenticated request.
///
/// Built by the API layer from a validated access token and passed into
/// service methods so that every mutation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The username from the token claims.
    pub username: String,
    /// Whether the token came straight from a password login.
    pub fresh: bool,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64, username: impl Into<String>, fresh: bool) -> Self {
        Self {
            user_id,
            username: username.into(),
            fresh,
            request_time: Utc::now(),
        }
    }

    /// Fails with an authorization error unless the caller is `owner_id`.
    pub fn require_owner(&self, owner_id: i64, message: &str) -> AppResult<()> {
        if self.user_id != owner_id {
            return Err(AppError::authorization(message));
        }
        Ok(())
    }

    /// Fails unless the access token was issued by a password login.
    pub fn require_fresh(&self) -> AppResult<()> {
        if !self.fresh {
            return Err(AppError::authorization(
                "Fresh token required; log in again to continue",
            ));
        }
        Ok(())
    }
}
