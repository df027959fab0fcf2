//! Bearer token verification.
//!
//! Tokens are HS256 JWTs issued by the identity provider in front of this
//! service. The API only needs the subject; it never issues tokens in
//! production, but [`generate_access_token`] is kept for tooling and tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims embedded in access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (caller identity).
    pub sub: String,
    /// Expiry (unix timestamp).
    pub exp: i64,
    /// Issued at (unix timestamp).
    pub iat: i64,
}

/// Sign an access token for `user_id` valid for `ttl`.
pub fn generate_access_token(
    user_id: &str,
    ttl: Duration,
    secret: &[u8],
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        exp: (now + ttl).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AppError::Internal(format!("jwt encode: {e}")))
}

/// Verify an access token, returning the claims on success.
///
/// An empty secret rejects everything.
pub fn verify_access_token(token: &str, secret: &[u8]) -> Option<TokenClaims> {
    if secret.is_empty() {
        return None;
    }
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<TokenClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}
