//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use wellness_core::WellnessError;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Bad gateway: {0}")]
    BadGateway(String),

    #[error("Upstream failure")]
    Upstream(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::NotConfigured(m) => {
                (StatusCode::NOT_IMPLEMENTED, "not_configured", m.as_str())
            }
            AppError::BadGateway(m) => (StatusCode::BAD_GATEWAY, "bad_gateway", m.as_str()),
            AppError::Upstream(detail) => {
                error!(%detail, "upstream call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream_error",
                    "AI chat failed",
                )
            }
            AppError::Internal(detail) => {
                error!(%detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                )
            }
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<WellnessError> for AppError {
    fn from(e: WellnessError) -> Self {
        match e {
            WellnessError::Validation(msg) => AppError::Validation(msg),
            WellnessError::NotConfigured(msg) => AppError::NotConfigured(msg),
            WellnessError::UpstreamEmptyResponse => {
                AppError::BadGateway("Invalid response from AI provider".into())
            }
            WellnessError::Upstream(msg) => AppError::Upstream(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.into_response();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[tokio::test]
    async fn core_errors_map_to_statuses() {
        let cases = [
            (
                WellnessError::Validation("Valid message required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                WellnessError::NotConfigured("AI provider not configured".into()),
                StatusCode::NOT_IMPLEMENTED,
            ),
            (WellnessError::UpstreamEmptyResponse, StatusCode::BAD_GATEWAY),
            (
                WellnessError::Upstream("connect refused".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let (status, _) = render(AppError::from(err)).await;
            assert_eq!(status, expected);
        }
    }

    #[tokio::test]
    async fn upstream_detail_is_not_leaked() {
        let (status, json) = render(AppError::Upstream(
            "error sending request for url (https://secret.example/v1)".into(),
        ))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "upstream_error");
        assert_eq!(json["message"], "AI chat failed");
        assert!(!json.to_string().contains("secret.example"));
    }

    #[tokio::test]
    async fn validation_message_is_returned() {
        let (_, json) = render(AppError::Validation("Valid message required".into())).await;
        assert_eq!(json["error"], "validation_error");
        assert_eq!(json["message"], "Valid message required");
    }
}
