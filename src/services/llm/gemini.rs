//! Google Gemini `generateContent` client.
//!
//! The request pins `responseMimeType` to JSON so the reply text carries the
//! flow's declared output object.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::LlmError;

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

pub async fn complete(config: &GeminiConfig, prompt: &str) -> Result<String, LlmError> {
    let api_key = config
        .api_key
        .as_deref()
        .ok_or(LlmError::MissingApiKey("Gemini"))?;

    let request = GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: prompt }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json",
            temperature: 0.7,
        },
    };

    let client = Client::builder().timeout(config.timeout).build()?;
    let url = format!("{}/models/{}:generateContent", config.base_url, config.model);

    let response = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&request)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        return Err(LlmError::Api { status, message });
    }

    let body: GenerateResponse = response.json().await?;
    extract_text(body)
}

fn extract_text(body: GenerateResponse) -> Result<String, LlmError> {
    body.candidates
        .first()
        .and_then(|candidate| candidate.content.parts.first())
        .map(|part| part.text.clone())
        .ok_or_else(|| LlmError::Parse("no candidates in Gemini response".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {"content": {"parts": [{"text": "{\"response\": \"ok\"}"}], "role": "model"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_text(body).unwrap(), "{\"response\": \"ok\"}");
    }

    #[test]
    fn empty_candidates_is_a_parse_error() {
        let body: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(matches!(extract_text(body), Err(LlmError::Parse(_))));
    }
}
