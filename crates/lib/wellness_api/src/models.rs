//! Wire models owned by the API layer.
//!
//! Domain replies (`ChatReply`, `AiAnswer`, `Intro`) are serialized directly
//! from `wellness_core`.

use serde::Serialize;

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub ai_configured: bool,
    /// Model sent to the completion provider.
    pub ai_model: String,
}
