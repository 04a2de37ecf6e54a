//! External LLM provider clients.
//!
//! The provider is a black box: one assembled prompt in, one structured JSON
//! object out. Each flow declares its output shape as a `Deserialize` type;
//! a provider that ignores the JSON instruction and answers in prose is
//! recovered by treating the whole reply as the single expected field.
//! No retries anywhere: a failed call propagates to the handler.

pub mod gemini;
pub mod openai;

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{Config, ProviderKind};

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("{0} API key not configured")]
    MissingApiKey(&'static str),
}

/// Unified LLM provider — dispatches to the Gemini or OpenAI-compatible
/// backend selected by configuration.
#[derive(Debug, Clone)]
pub enum Provider {
    Gemini(gemini::GeminiConfig),
    OpenAi(openai::OpenAiConfig),
}

impl Provider {
    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.request_timeout_secs);
        match config.provider {
            ProviderKind::Gemini => Provider::Gemini(gemini::GeminiConfig {
                api_key: config.api_key.clone(),
                base_url: config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "https://generativelanguage.googleapis.com/v1beta".to_string()),
                model: config.model.clone(),
                timeout,
            }),
            ProviderKind::OpenAi => Provider::OpenAi(openai::OpenAiConfig {
                api_key: config.api_key.clone(),
                base_url: config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
                model: config.model.clone(),
                timeout,
            }),
        }
    }

    /// Send a single prompt and return the provider's raw text reply.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        match self {
            Provider::Gemini(config) => gemini::complete(config, prompt).await,
            Provider::OpenAi(config) => openai::complete(config, prompt).await,
        }
    }

    /// Send a prompt that declares a JSON output shape and decode the reply
    /// into it.
    pub async fn generate<T>(&self, prompt: &str) -> Result<T, LlmError>
    where
        T: DeserializeOwned + FromText,
    {
        let text = self.complete(prompt).await?;
        Ok(decode_output(&text))
    }
}

/// Fallback construction for providers that answer in bare prose.
pub trait FromText {
    fn from_text(text: String) -> Self;
}

fn decode_output<T: DeserializeOwned + FromText>(text: &str) -> T {
    let candidate = strip_json_fence(text);
    match serde_json::from_str(candidate) {
        Ok(value) => value,
        Err(_) => T::from_text(text.trim().to_string()),
    }
}

// Some models wrap the requested JSON object in a markdown fence.
fn strip_json_fence(text: &str) -> &str {
    let trimmed = text.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reply {
        response: String,
    }

    impl FromText for Reply {
        fn from_text(text: String) -> Self {
            Self { response: text }
        }
    }

    #[test]
    fn decodes_declared_json_shape() {
        let reply: Reply = decode_output(r#"{"response": "hi there"}"#);
        assert_eq!(reply.response, "hi there");
    }

    #[test]
    fn decodes_fenced_json() {
        let reply: Reply = decode_output("```json\n{\"response\": \"fenced\"}\n```");
        assert_eq!(reply.response, "fenced");
    }

    #[test]
    fn falls_back_to_bare_text() {
        let reply: Reply = decode_output("Just a plain sentence.");
        assert_eq!(reply.response, "Just a plain sentence.");
    }

    #[test]
    fn mismatched_json_object_falls_back_to_text() {
        // Valid JSON but not the declared shape — the raw reply survives.
        let reply: Reply = decode_output(r#"{"unexpected": 1}"#);
        assert_eq!(reply.response, r#"{"unexpected": 1}"#);
    }
}
