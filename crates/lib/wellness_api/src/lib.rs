//! # wellness_api
//!
//! HTTP API library for the wellness chatbot.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use wellness_core::ai::AiClient;
use wellness_core::responder::Responder;

use crate::config::ApiConfig;
use crate::handlers::{ai, chat, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Keyword classifier and response pools, built once at startup.
    pub responder: Arc<Responder>,
    /// Completion-provider client.
    pub ai: Arc<AiClient>,
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no auth required)
    let public = Router::new().route(routes::GET_API_HEALTH, get(health::health_handler));

    // Protected routes (require auth)
    let protected = Router::new()
        .route(routes::GET_API_CHAT_INTRO, get(chat::intro_handler))
        .route(routes::POST_API_CHAT_MESSAGE, post(chat::message_handler))
        .route(routes::POST_API_CHAT_AI, post(ai::ai_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
