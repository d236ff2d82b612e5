//! Admin authentication: argon2 password hashes and bearer tokens.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const ADMIN_ROLE: &str = "admin";
const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Signed-in staff member, as read back from the bearer token.
///
/// Handlers that take `AdminClaims` only run for tokens issued to an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// `users.id` of the account that signed in
    pub sub: i32,
    pub username: String,
    pub role: String,
    pub exp: usize,
}

impl AdminClaims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminClaims
where
    S: Send + Sync,
{
    type Rejection = DomainError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .ok_or(DomainError::Unauthorized)?;

        let claims = read_token(token)?;
        if !claims.is_admin() {
            tracing::warn!("User {} lacks the admin role", claims.username);
            return Err(DomainError::Unauthorized);
        }
        Ok(claims)
    }
}

pub fn hash_password(password: &str) -> Result<String, DomainError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| DomainError::Internal(format!("password hashing failed: {}", e)))
}

/// A stored hash that does not parse never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    PasswordHash::new(password_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

fn jwt_secret() -> Result<String, DomainError> {
    match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret),
        _ if cfg!(debug_assertions) => Ok("shoap-dev-secret".to_owned()),
        _ => Err(DomainError::Internal("JWT_SECRET must be set".to_owned())),
    }
}

/// Signs a token for a user row, valid for a day.
pub fn issue_token(user_id: i32, username: &str, role: &str) -> Result<String, DomainError> {
    let exp = Utc::now()
        .checked_add_signed(Duration::hours(TOKEN_LIFETIME_HOURS))
        .ok_or_else(|| DomainError::Internal("token expiry out of range".to_owned()))?
        .timestamp();

    let claims = AdminClaims {
        sub: user_id,
        username: username.to_owned(),
        role: role.to_owned(),
        exp: exp as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret()?.as_bytes()),
    )
    .map_err(|e| DomainError::Internal(format!("token signing failed: {}", e)))
}

/// Forged, malformed or expired tokens are `Unauthorized`.
pub fn read_token(token: &str) -> Result<AdminClaims, DomainError> {
    decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret()?.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("Rejected bearer token: {}", e);
        DomainError::Unauthorized
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_hash_never_matches() {
        assert!(!verify_password("admin123", ""));
        assert!(!verify_password("admin123", "not-a-phc-string"));
    }

    #[test]
    fn token_carries_the_user_row() {
        let token = issue_token(7, "meera", "staff").unwrap();
        let claims = read_token(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "meera");
        assert!(!claims.is_admin());
    }
}
