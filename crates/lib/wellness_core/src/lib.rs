//! # wellness_core
//!
//! Core domain logic for the wellness chatbot: keyword-matched canned
//! responses, the static introduction, and the completion-provider client.

pub mod ai;
pub mod error;
pub mod intro;
pub mod message;
pub mod responder;

pub use error::WellnessError;

use chrono::{SecondsFormat, Utc};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Current UTC time as an RFC 3339 string with millisecond precision
/// (e.g. `2024-05-01T12:34:56.789Z`).
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
