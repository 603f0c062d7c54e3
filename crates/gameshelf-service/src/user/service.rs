//! User registration, profiles, and password changes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use gameshelf_auth::password::{PasswordHasher, PasswordValidator};
use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::UserStore;
use gameshelf_entity::user::{CreateUser, UpdateUser, User};

use crate::context::RequestContext;

/// Handles user accounts.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User store.
    users: Arc<dyn UserStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password validator.
    validator: Arc<PasswordValidator>,
}

/// Data for registering a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUser {
    pub username: String,
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
}

/// Data for changing a password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
        }
    }

    /// Registers a new account.
    pub async fn register(&self, req: RegisterUser) -> AppResult<User> {
        self.validator.validate(&req.password)?;

        if self.users.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already exists"));
        }
        if self.users.find_by_username(&req.username).await?.is_some() {
            return Err(AppError::conflict("Username already exists"));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;
        let user = self
            .users
            .create(&CreateUser {
                username: req.username,
                email: req.email,
                password_hash,
                bio: req.bio,
                photo: req.photo,
            })
            .await?;

        info!(user_id = user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Gets a user by ID.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Lists every user.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Updates the caller's own profile.
    pub async fn update(&self, ctx: &RequestContext, id: i64, data: UpdateUser) -> AppResult<User> {
        ctx.require_owner(id, "You can only update your own account")?;

        if data.is_empty() {
            return self.get(id).await;
        }

        let user = self
            .users
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        info!(user_id = id, "Profile updated");
        Ok(user)
    }

    /// Deletes the caller's own account and everything it owns.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        ctx.require_owner(id, "You can only delete your own account")?;

        if !self.users.delete(id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = id, "User deleted");
        Ok(())
    }

    /// Changes the caller's password. Requires a fresh token.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        id: i64,
        req: ChangePassword,
    ) -> AppResult<()> {
        ctx.require_owner(id, "You can only change your own password")?;
        ctx.require_fresh()?;

        let user = self.get(id).await?;
        if !self
            .hasher
            .verify_password(&req.old_password, &user.password_hash)?
        {
            return Err(AppError::authentication("Invalid credentials"));
        }

        self.validator
            .validate_confirmation(&req.new_password, &req.confirm_password)?;
        self.validator
            .validate_not_same(&req.old_password, &req.new_password)?;
        self.validator.validate(&req.new_password)?;

        let new_hash = self.hasher.hash_password(&req.new_password)?;
        if !self.users.update_password(id, &new_hash).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = id, "Password changed");
        Ok(())
    }
}
