//! Named flows: classify the message, assemble the prompt, call the
//! provider, post-process the reply.
//!
//! Every flow is stateless; session bookkeeping stays in the handlers.

use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

use crate::services::intent;
use crate::services::llm::{FromText, Provider};
use crate::services::prompt::PromptEngine;
use crate::services::search;
use crate::types::errors::AppError;

// ---------------------------------------------------------------------------
// open_chat

pub struct OpenChatInput<'a> {
    pub message: &'a str,
    pub conversation_history: &'a str,
    /// Client-side greeting detection wins over the server classifier.
    pub is_greeting: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct OpenChatOutput {
    pub response: String,
}

impl FromText for OpenChatOutput {
    fn from_text(text: String) -> Self {
        Self { response: text }
    }
}

pub async fn open_chat(
    llm: &Provider,
    prompts: &PromptEngine,
    input: OpenChatInput<'_>,
) -> Result<OpenChatOutput, AppError> {
    let mut flags = intent::classify(input.message);
    if let Some(greeting) = input.is_greeting {
        flags.is_greeting = greeting;
    }
    tracing::debug!(?flags, "classified message");

    let search_results = if flags.wants_live_data {
        Some(search::web_search(input.message).await)
    } else {
        None
    };

    let prompt = prompts.chat_prompt(
        input.message,
        input.conversation_history,
        flags,
        search_results.as_deref(),
    )?;

    let output: OpenChatOutput = llm.generate(&prompt).await?;
    log_interaction(input.message, &output.response);
    Ok(output)
}

/// Interaction record for a future learning loop. Deliberately a trace-only
/// stub: nothing is persisted.
fn log_interaction(user_message: &str, ai_response: &str) {
    tracing::debug!(
        user = %user_message,
        response_len = ai_response.len(),
        "storing interaction"
    );
}

// ---------------------------------------------------------------------------
// generate_code

pub struct GenerateCodeInput<'a> {
    pub prompt: &'a str,
    pub language: Option<&'a str>,
    pub previous_code: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateCodeOutput {
    pub code: String,
}

impl FromText for GenerateCodeOutput {
    fn from_text(text: String) -> Self {
        Self { code: text }
    }
}

pub async fn generate_code(
    llm: &Provider,
    prompts: &PromptEngine,
    input: GenerateCodeInput<'_>,
) -> Result<GenerateCodeOutput, AppError> {
    let language = input.language.unwrap_or("javascript");
    let prompt = prompts.code_prompt(input.prompt, language, input.previous_code)?;

    let output: GenerateCodeOutput = llm.generate(&prompt).await?;
    Ok(GenerateCodeOutput {
        code: wrap_code(language, &output.code),
    })
}

/// Callers receive a fenced block tagged with the language, ready for
/// syntax highlighting.
fn wrap_code(language: &str, code: &str) -> String {
    format!("```{}\n{}\n```", language, code)
}

// ---------------------------------------------------------------------------
// analyze_file

pub struct AnalyzeFileInput<'a> {
    pub file_url: &'a str,
    pub file_type: &'a str,
    /// Inline content for text files; binary files are described by url/type.
    pub file_content: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeFileOutput {
    pub analysis: String,
}

impl FromText for AnalyzeFileOutput {
    fn from_text(text: String) -> Self {
        Self { analysis: text }
    }
}

pub async fn analyze_file(
    llm: &Provider,
    prompts: &PromptEngine,
    input: AnalyzeFileInput<'_>,
) -> Result<AnalyzeFileOutput, AppError> {
    let prompt = prompts.analyze_prompt(input.file_url, input.file_type, input.file_content)?;
    let output = llm.generate(&prompt).await?;
    Ok(output)
}

// ---------------------------------------------------------------------------
// summarize_context

pub struct SummarizeContextInput<'a> {
    pub conversation_history: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeContextOutput {
    pub summary: String,
}

impl FromText for SummarizeContextOutput {
    fn from_text(text: String) -> Self {
        Self { summary: text }
    }
}

pub async fn summarize_context(
    llm: &Provider,
    prompts: &PromptEngine,
    input: SummarizeContextInput<'_>,
) -> Result<SummarizeContextOutput, AppError> {
    let prompt = prompts.summarize_prompt(input.conversation_history)?;
    let output = llm.generate(&prompt).await?;
    Ok(output)
}

// ---------------------------------------------------------------------------
// code-fence splitting

fn code_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"```(\w+)?\n((?s).*?)\n```").unwrap())
}

/// Split the first fenced code block out of a reply: `(language, text)`.
/// Replies without a fence come back whole, with no language.
pub fn split_code_block(response: &str) -> (Option<String>, String) {
    match code_block_re().captures(response) {
        Some(caps) => (
            caps.get(1).map(|m| m.as_str().to_string()),
            caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default(),
        ),
        None => (None, response.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_tagged_code_block() {
        let (language, text) = split_code_block("```python\nprint('hi')\n```");
        assert_eq!(language.as_deref(), Some("python"));
        assert_eq!(text, "print('hi')");
    }

    #[test]
    fn untagged_fence_has_no_language() {
        let (language, text) = split_code_block("```\nlet x = 1;\n```");
        assert_eq!(language, None);
        assert_eq!(text, "let x = 1;");
    }

    #[test]
    fn plain_replies_pass_through() {
        let (language, text) = split_code_block("Nothing fenced here.");
        assert_eq!(language, None);
        assert_eq!(text, "Nothing fenced here.");
    }

    #[test]
    fn first_fence_wins_and_keeps_inner_newlines() {
        let reply = "intro\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\ntrailer";
        let (language, text) = split_code_block(reply);
        assert_eq!(language.as_deref(), Some("rust"));
        assert_eq!(text, "fn main() {\n    println!(\"hi\");\n}");
    }

    #[test]
    fn generated_code_is_fence_wrapped_round_trip() {
        let wrapped = wrap_code("python", "print('hi')");
        let (language, text) = split_code_block(&wrapped);
        assert_eq!(language.as_deref(), Some("python"));
        assert_eq!(text, "print('hi')");
    }
}
