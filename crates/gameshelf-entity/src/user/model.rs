//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maximum username length.
pub const USERNAME_MAX_LEN: usize = 80;
/// Maximum email length.
pub const EMAIL_MAX_LEN: usize = 120;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Unique email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Free-form profile text.
    pub bio: Option<String>,
    /// Profile photo URL.
    pub photo: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Profile text.
    pub bio: Option<String>,
    /// Profile photo URL.
    pub photo: Option<String>,
}

/// Partial update of a user's profile. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New username.
    pub username: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New profile text.
    pub bio: Option<String>,
    /// New profile photo URL.
    pub photo: Option<String>,
}

impl UpdateUser {
    /// Returns `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.bio.is_none() && self.photo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            username: "gaby".to_string(),
            email: "gaby@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            bio: None,
            photo: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "gaby");
    }

    #[test]
    fn test_update_user_is_empty() {
        assert!(UpdateUser::default().is_empty());
        let update = UpdateUser {
            bio: Some("hi".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
