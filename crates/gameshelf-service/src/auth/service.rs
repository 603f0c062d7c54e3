//! Password login and refresh-token exchange.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use gameshelf_auth::jwt::{JwtDecoder, JwtEncoder, TokenPair};
use gameshelf_auth::password::PasswordHasher;
use gameshelf_core::error::AppError;
use gameshelf_core::result::AppResult;
use gameshelf_database::store::UserStore;
use gameshelf_entity::user::User;

use crate::context::RequestContext;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// A newly issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Issues tokens for valid credentials.
#[derive(Debug, Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    encoder: Arc<JwtEncoder>,
    decoder: Arc<JwtDecoder>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            encoder,
            decoder,
        }
    }

    /// Verifies a username and password and issues a fresh token pair.
    ///
    /// Unknown users and wrong passwords fail with the same message.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<TokenPair> {
        let Some(user) = self.users.find_by_username(username).await? else {
            warn!(username = %username, "Login failed: unknown user");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let pair = self.encoder.generate_token_pair(user.id, &user.username)?;
        info!(user_id = user.id, "User logged in");
        Ok(pair)
    }

    /// Exchanges a refresh token for a new, non-fresh access token.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AccessToken> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let user = self
            .users
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        let (access_token, expires_at) =
            self.encoder
                .generate_access_token(user.id, &user.username, false)?;

        info!(user_id = user.id, "Access token refreshed");
        Ok(AccessToken {
            access_token,
            expires_at,
        })
    }

    /// Ends the caller's session. Tokens are not revoked; they expire.
    pub fn logout(&self, ctx: &RequestContext) {
        info!(user_id = ctx.user_id, "User logged out");
    }

    /// The authenticated caller's account.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
