//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gameshelf_core::config::AuthConfig;
use gameshelf_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Creates signed JWT access and refresh tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in hours.
    refresh_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}

/// Tokens issued by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived, fresh access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl_minutes: i64::try_from(config.jwt_access_ttl_minutes).unwrap_or(i64::MAX),
            refresh_ttl_hours: i64::try_from(config.jwt_refresh_ttl_hours).unwrap_or(i64::MAX),
        }
    }

    /// Generates a fresh access token and a refresh token for a user.
    pub fn generate_token_pair(&self, user_id: i64, username: &str) -> Result<TokenPair, AppError> {
        let (access_token, access_expires_at) =
            self.generate_access_token(user_id, username, true)?;

        let now = Utc::now();
        let refresh_expires_at =
            expires_after(now, Duration::try_hours(self.refresh_ttl_hours), "refresh")?;
        let refresh_claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: refresh_expires_at.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Refresh,
            fresh: false,
        };
        let refresh_token = self.sign(&refresh_claims, "refresh")?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            access_expires_at,
            refresh_expires_at,
        })
    }

    /// Generates a standalone access token (e.g. after refresh).
    pub fn generate_access_token(
        &self,
        user_id: i64,
        username: &str,
        fresh: bool,
    ) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let exp = expires_after(now, Duration::try_minutes(self.access_ttl_minutes), "access")?;

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4(),
            token_type: TokenType::Access,
            fresh,
        };

        Ok((self.sign(&claims, "access")?, exp))
    }

    fn sign(&self, claims: &Claims, kind: &str) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode {kind} token: {e}")))
    }
}

/// Expiry for a token issued at `now`. Fails when the configured TTL
/// does not fit in a timestamp.
fn expires_after(
    now: DateTime<Utc>,
    ttl: Option<Duration>,
    kind: &str,
) -> Result<DateTime<Utc>, AppError> {
    ttl.and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| AppError::configuration(format!("The {kind} token TTL is out of range")))
}

#[cfg(test)]
mod tests {
    use gameshelf_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_access_token_expiry_follows_ttl() {
        let cfg = AuthConfig {
            jwt_access_ttl_minutes: 5,
            ..AuthConfig::default()
        };
        let before = Utc::now();
        let (_, exp) = JwtEncoder::new(&cfg)
            .generate_access_token(1, "gaby", true)
            .unwrap();
        assert!(exp >= before + Duration::minutes(5));
        assert!(exp <= Utc::now() + Duration::minutes(5));
    }

    #[test]
    fn test_oversized_access_ttl_is_configuration_error() {
        let cfg = AuthConfig {
            jwt_access_ttl_minutes: u64::MAX,
            ..AuthConfig::default()
        };
        let err = JwtEncoder::new(&cfg)
            .generate_token_pair(1, "gaby")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_oversized_refresh_ttl_is_configuration_error() {
        let cfg = AuthConfig {
            jwt_refresh_ttl_hours: u64::MAX / 2,
            ..AuthConfig::default()
        };
        let err = JwtEncoder::new(&cfg)
            .generate_token_pair(1, "gaby")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
