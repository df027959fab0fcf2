//! Chat-completion provider client.
//!
//! Forwards a single user message to an OpenAI-compatible
//! `/chat/completions` endpoint behind a fixed system prompt and relays the
//! first choice's content. One attempt per call, bounded by
//! [`AiConfig::timeout`].

pub mod config;

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::WellnessError;
use crate::message::MessageBody;

pub use config::AiConfig;

/// Persona/scope instruction sent ahead of every user message.
pub const SYSTEM_PROMPT: &str =
    "You are a wellness chatbot. Give short helpful health and mental wellness tips.";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Answer relayed from the provider.
#[derive(Debug, Clone, Serialize)]
pub struct AiAnswer {
    pub answer: String,
    pub model: String,
    pub timestamp: String,
}

/// Stateless client for the completion provider.
#[derive(Debug, Clone)]
pub struct AiClient {
    config: AiConfig,
    http: Client,
}

impl AiClient {
    /// Fails if the timeout is zero, which would fail every call.
    pub fn new(config: AiConfig) -> Result<Self, WellnessError> {
        if config.timeout.is_zero() {
            return Err(WellnessError::Validation(
                "AI timeout must be greater than zero".into(),
            ));
        }
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WellnessError::Upstream(format!("build http client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Validate the request body, then [`complete`](Self::complete).
    pub async fn handle_message(&self, body: MessageBody) -> Result<AiAnswer, WellnessError> {
        let message = body.into_text()?;
        self.complete(&message).await
    }

    /// Ask the provider for an answer to `message`.
    ///
    /// Input and configuration are checked before any network I/O.
    pub async fn complete(&self, message: &str) -> Result<AiAnswer, WellnessError> {
        if message.is_empty() {
            return Err(WellnessError::Validation(
                crate::message::INVALID_MESSAGE.into(),
            ));
        }
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => {
                return Err(WellnessError::NotConfigured(
                    "AI provider not configured".into(),
                ));
            }
        };

        let request = CompletionRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        let url = self.config.completions_url();
        debug!(%url, model = %self.config.model, "sending completion request");

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, timeout = ?e.is_timeout(), "completion request failed");
                WellnessError::Upstream(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                %status,
                body = truncate_for_log(&body, LOG_BODY_LIMIT),
                body_len = body.len(),
                "completion provider returned an error status"
            );
            return Err(WellnessError::Upstream(format!(
                "provider responded with {status}"
            )));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(error = %e, "failed to read completion response body");
            WellnessError::Upstream(format!("read body: {e}"))
        })?;

        let answer = serde_json::from_slice::<Value>(&bytes)
            .ok()
            .as_ref()
            .and_then(extract_answer)
            .ok_or_else(|| {
                warn!(len = bytes.len(), "completion response had no usable content");
                WellnessError::UpstreamEmptyResponse
            })?;

        Ok(AiAnswer {
            answer,
            model: self.config.model.clone(),
            timestamp: crate::timestamp_now(),
        })
    }
}

/// Longest provider error body written to the log.
const LOG_BODY_LIMIT: usize = 512;

/// At most `max` bytes of `text`, cut on a char boundary.
fn truncate_for_log(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// `choices[0].message.content`, if it is a non-empty string.
fn extract_answer(body: &Value) -> Option<String> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
