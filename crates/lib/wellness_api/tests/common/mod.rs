//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use tower::ServiceExt;
use wellness_api::{AppState, auth, config::ApiConfig};
use wellness_core::ai::{AiClient, AiConfig};
use wellness_core::responder::{IndexPicker, RandomPicker, Responder};

pub const JWT_SECRET: &str = "test-secret";

pub fn token() -> String {
    auth::generate_access_token("user-123", chrono::Duration::minutes(5), JWT_SECRET.as_bytes())
        .expect("token")
}

pub fn app(ai: AiConfig) -> Router {
    app_with_picker(ai, Arc::new(RandomPicker))
}

pub fn app_with_picker(ai: AiConfig, picker: Arc<dyn IndexPicker>) -> Router {
    let state = AppState {
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            jwt_secret: JWT_SECRET.into(),
        },
        responder: Arc::new(Responder::with_picker(picker)),
        ai: Arc::new(AiClient::new(ai).expect("ai client")),
    };
    wellness_api::router(state)
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Local stand-in for the completion provider that counts requests.
#[derive(Clone)]
pub struct ProviderStub {
    pub hits: Arc<AtomicUsize>,
    pub status: StatusCode,
    pub body: String,
    pub delay: Duration,
}

impl ProviderStub {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            hits: Arc::new(AtomicUsize::new(0)),
            status,
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Serve on an ephemeral port, returning the API base URL.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/v1/chat/completions", post(completions))
            .with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });
        format!("http://{addr}/v1")
    }
}

async fn completions(State(stub): State<ProviderStub>) -> impl IntoResponse {
    stub.hits.fetch_add(1, Ordering::SeqCst);
    tokio::time::sleep(stub.delay).await;
    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

pub fn ai_config(base_url: String, api_key: Option<&str>) -> AiConfig {
    AiConfig {
        api_key: api_key.map(str::to_owned),
        model: "openai/gpt-4o-mini".into(),
        base_url,
        timeout: Duration::from_secs(5),
    }
}
