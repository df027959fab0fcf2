//! Completion-provider passthrough endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use wellness_core::ai::AiAnswer;
use wellness_core::message::MessageBody;

use crate::AppState;
use crate::error::AppResult;
use crate::handlers::chat::reject_body;
use crate::middleware::auth::AuthenticatedUser;

/// `POST /api/chat/ai` — forward the message to the completion provider.
pub async fn ai_handler(
    State(state): State<AppState>,
    axum::Extension(_user): axum::Extension<AuthenticatedUser>,
    body: Result<Json<MessageBody>, JsonRejection>,
) -> AppResult<Json<AiAnswer>> {
    let Json(body) = body.map_err(reject_body)?;
    let answer = state.ai.handle_message(body).await?;
    Ok(Json(answer))
}
