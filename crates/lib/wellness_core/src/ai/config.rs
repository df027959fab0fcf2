//! Completion provider configuration.

use std::env;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Settings for the chat-completion provider.
#[derive(Clone)]
pub struct AiConfig {
    /// Bearer key. `None` disables the AI endpoint.
    pub api_key: Option<String>,
    /// Model identifier sent with every request.
    pub model: String,
    /// API base; `/chat/completions` is appended.
    pub base_url: String,
    /// Bound on the whole upstream call, body included.
    pub timeout: Duration,
}

impl std::fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            base_url: DEFAULT_BASE_URL.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AiConfig {
    /// Reads configuration from environment variables.
    ///
    /// | Variable              | Default                        |
    /// |-----------------------|--------------------------------|
    /// | `OPENROUTER_API_KEY`  | unset (AI endpoint disabled)   |
    /// | `OPENROUTER_MODEL`    | `openai/gpt-4o-mini`           |
    /// | `OPENROUTER_BASE_URL` | `https://openrouter.ai/api/v1` |
    /// | `AI_TIMEOUT_SECS`     | `15`                           |
    ///
    /// Empty values count as unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            api_key: var("OPENROUTER_API_KEY"),
            model: var("OPENROUTER_MODEL").unwrap_or(defaults.model),
            base_url: var("OPENROUTER_BASE_URL").unwrap_or(defaults.base_url),
            timeout: var("AI_TIMEOUT_SECS")
                .map_or(defaults.timeout, |raw| parse_timeout_secs(&raw)),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub(crate) fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Positive whole seconds; anything else falls back to [`DEFAULT_TIMEOUT`].
fn parse_timeout_secs(raw: &str) -> Duration {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            warn!(
                value = raw,
                default_secs = DEFAULT_TIMEOUT.as_secs(),
                "AI_TIMEOUT_SECS must be a positive integer, using default"
            );
            DEFAULT_TIMEOUT
        }
    }
}
