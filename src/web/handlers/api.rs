//! JSON API endpoint handlers

use axum::{extract::State, Json};
use std::time::Instant;

use crate::services::flows::{self, GenerateCodeInput, OpenChatInput, SummarizeContextInput};
use crate::services::ConversationHistory;
use crate::state::AppState;
use crate::types::errors::AppError;
use crate::types::message::{
    ChatRequest, ChatResponse, CodeRequest, CodeResponse, SummarizeRequest, SummarizeResponse,
};
use crate::types::session::ChatMessage;

/// Handle a chat message: resolve the transcript, run the chat flow, split
/// any fenced code out of the reply, then record the exchange.
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let started = Instant::now();
    tracing::info!(
        "Received message: '{}' for session: {:?}",
        req.message,
        req.session_id
    );

    // Session-backed history wins; sessionless callers may carry their own.
    let history = match &req.session_id {
        Some(id) => state
            .sessions
            .read()
            .await
            .get(id)
            .map(|session| session.history.clone())
            .unwrap_or_default(),
        None => ConversationHistory::from_text(req.conversation_history.clone().unwrap_or_default()),
    };
    let history = history.truncated(state.config.max_history_chars);

    let result = flows::open_chat(
        &state.llm,
        &state.prompts,
        OpenChatInput {
            message: &req.message,
            conversation_history: &history,
            is_greeting: req.is_greeting,
        },
    )
    .await;

    let output = match result {
        Ok(output) => output,
        Err(e) => {
            state.metrics.record_failure();
            return Err(e);
        }
    };

    let (code_language, text) = flows::split_code_block(&output.response);

    if let Some(id) = &req.session_id {
        let mut sessions = state.sessions.write().await;
        let session = sessions.get_or_create(id);
        session.add_message(ChatMessage::new_user(req.message.clone()));
        session.add_message(ChatMessage::new_assistant(text.clone(), code_language.clone()));
        session.record_exchange(&req.message, &text);
    }

    state.metrics.record_request(started.elapsed().as_millis() as u64);

    Ok(Json(ChatResponse {
        response: text,
        code_language,
    }))
}

pub async fn generate_code(
    State(state): State<AppState>,
    Json(req): Json<CodeRequest>,
) -> Result<Json<CodeResponse>, AppError> {
    let started = Instant::now();
    tracing::info!("Code generation request: '{}'", req.prompt);

    let output = flows::generate_code(
        &state.llm,
        &state.prompts,
        GenerateCodeInput {
            prompt: &req.prompt,
            language: req.language.as_deref(),
            previous_code: req.previous_code.as_deref(),
        },
    )
    .await
    .map_err(|e| {
        state.metrics.record_failure();
        e
    })?;

    state.metrics.record_request(started.elapsed().as_millis() as u64);
    Ok(Json(CodeResponse { code: output.code }))
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let started = Instant::now();

    let output = flows::summarize_context(
        &state.llm,
        &state.prompts,
        SummarizeContextInput {
            conversation_history: &req.conversation_history,
        },
    )
    .await
    .map_err(|e| {
        state.metrics.record_failure();
        e
    })?;

    state.metrics.record_request(started.elapsed().as_millis() as u64);
    Ok(Json(SummarizeResponse {
        summary: output.summary,
    }))
}
