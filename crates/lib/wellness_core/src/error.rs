//! Domain error types.

use thiserror::Error;

/// Errors produced by the chatbot core.
///
/// The canned responder only ever fails with [`WellnessError::Validation`];
/// the other variants come from the completion-provider client.
#[derive(Debug, Error)]
pub enum WellnessError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),

    #[error("Upstream returned no usable content")]
    UpstreamEmptyResponse,

    #[error("Upstream call failed: {0}")]
    Upstream(String),
}
