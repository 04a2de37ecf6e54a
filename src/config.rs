use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Server configuration
    pub host: String,
    pub port: u16,

    // LLM provider configuration
    pub provider: ProviderKind,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,

    // Conversation handling
    pub max_history_chars: usize,

    // Outbound HTTP
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKind {
    Gemini,
    OpenAi,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Gemini => "gemini",
            ProviderKind::OpenAi => "openai",
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let provider = match env::var("LLM_PROVIDER").as_deref() {
            Ok("openai") => ProviderKind::OpenAi,
            _ => ProviderKind::Gemini,
        };

        // The key matching the selected provider. Requests fail with a
        // configuration error when absent; the server still starts.
        let api_key = match provider {
            ProviderKind::Gemini => env::var("GEMINI_API_KEY").ok(),
            ProviderKind::OpenAi => env::var("OPENAI_API_KEY").ok(),
        };

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()?,

            provider,
            model: env::var("LLM_MODEL").unwrap_or_else(|_| default_model(provider).to_string()),
            api_key,
            base_url: env::var("LLM_BASE_URL").ok(),

            max_history_chars: env::var("MAX_HISTORY_CHARS")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()?,

            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
        })
    }
}

fn default_model(provider: ProviderKind) -> &'static str {
    match provider {
        ProviderKind::Gemini => "gemini-2.0-flash",
        ProviderKind::OpenAi => "gpt-4o-mini",
    }
}
