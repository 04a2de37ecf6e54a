//! OpenAI-compatible chat completions client.
//!
//! Also covers self-hosted gateways that speak the same API; point
//! `LLM_BASE_URL` at them.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::LlmError;

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub async fn complete(config: &OpenAiConfig, prompt: &str) -> Result<String, LlmError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(LlmError::MissingApiKey("OpenAI"))?;

    let request = ChatCompletionRequest {
        model: &config.model,
        messages: vec![RequestMessage {
            role: "user",
            content: prompt,
        }],
        response_format: ResponseFormat {
            kind: "json_object",
        },
        temperature: 0.7,
    };

    let client = Client::builder().timeout(config.timeout).build()?;
    let url = format!("{}/chat/completions", config.base_url);

    let response = client
        .post(&url)
        .bearer_auth(api_key)
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(LlmError::Api { status, message });
    }

    let body: ChatCompletionResponse = response.json().await?;
    extract_text(body)
}

fn extract_text(body: ChatCompletionResponse) -> Result<String, LlmError> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| LlmError::Parse("no choices in completion response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let body: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "hello"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(body).unwrap(), "hello");
    }

    #[test]
    fn empty_choices_is_a_parse_error() {
        let body: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(extract_text(body), Err(LlmError::Parse(_))));
    }
}
