//! API server configuration.

use crate::error::{AppError, AppResult};

/// Configuration for the API server.
#[derive(Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3100").
    pub bind_addr: String,
    /// HS256 secret used to verify bearer tokens.
    pub jwt_secret: String,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("bind_addr", &self.bind_addr)
            .field("jwt_secret", &"<redacted>")
            .finish()
    }
}

impl ApiConfig {
    /// Fails on a blank secret, which would reject every protected request.
    pub fn new(bind_addr: impl Into<String>, jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.trim().is_empty() {
            return Err(AppError::Validation("JWT_SECRET must not be empty".into()));
        }
        Ok(Self {
            bind_addr: bind_addr.into(),
            jwt_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_secret_is_rejected() {
        assert!(ApiConfig::new("127.0.0.1:3100", "").is_err());
        assert!(ApiConfig::new("127.0.0.1:3100", "   ").is_err());
    }

    #[test]
    fn debug_redacts_secret() {
        let config = ApiConfig::new("127.0.0.1:3100", "s3cret").unwrap();
        assert_eq!(config.jwt_secret, "s3cret");
        assert!(!format!("{config:?}").contains("s3cret"));
    }
}
