//! Bearer authentication for the chat routes.
//!
//! Credentials are checked here and nowhere else; handlers only see the
//! verified [`AuthenticatedUser`].

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::AppState;
use crate::auth::{TokenClaims, verify_access_token};
use crate::error::AppError;

/// Verified caller identity, stored in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

impl AuthenticatedUser {
    /// Opaque caller id from the token subject.
    pub fn subject(&self) -> &str {
        &self.0.sub
    }
}

/// The token from `Authorization: Bearer <token>`.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    match header.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        Some(_) => Err(AppError::Unauthorized("Empty bearer token".into())),
        None => Err(AppError::Unauthorized(
            "Invalid authorization scheme".into(),
        )),
    }
}

/// Rejects chat requests without a valid bearer token (401) and attaches
/// the caller's identity to the rest.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = request.uri().path().to_owned();

    let user = bearer_token(request.headers())
        .and_then(|token| {
            verify_access_token(token, state.config.jwt_secret.as_bytes())
                .map(AuthenticatedUser)
                .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".into()))
        })
        .inspect_err(|e| debug!(%path, reason = %e, "rejected chat request"))?;

    debug!(%path, subject = user.subject(), "authenticated chat request");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
