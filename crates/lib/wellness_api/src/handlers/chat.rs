//! Canned-response chat endpoints.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;
use wellness_core::intro::{Intro, intro};
use wellness_core::message::{INVALID_MESSAGE, MessageBody};
use wellness_core::responder::ChatReply;

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthenticatedUser;

/// `GET /api/chat/intro` — static greeting, capabilities and disclaimer.
pub async fn intro_handler(
    axum::Extension(_user): axum::Extension<AuthenticatedUser>,
) -> Json<Intro> {
    Json(intro())
}

/// `POST /api/chat/message` — keyword-matched canned response.
pub async fn message_handler(
    State(state): State<AppState>,
    axum::Extension(_user): axum::Extension<AuthenticatedUser>,
    body: Result<Json<MessageBody>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(body) = body.map_err(reject_body)?;
    let reply = state.responder.handle_message(body)?;
    Ok(Json(reply))
}

/// Any unreadable body is treated the same as a missing message.
pub(crate) fn reject_body(rejection: JsonRejection) -> AppError {
    debug!(%rejection, "rejected request body");
    AppError::Validation(INVALID_MESSAGE.into())
}
