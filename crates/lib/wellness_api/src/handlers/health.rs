//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /api/health` — liveness plus AI endpoint status and model.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: wellness_core::version().into(),
        ai_configured: state.ai.is_configured(),
        ai_model: state.ai.model().into(),
    })
}
