use crate::state::AppState;
use crate::types::errors::AppError;
use axum::{extract::State, response::Html};
use uuid::Uuid;

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let session_id = Uuid::now_v7().to_string();

    // Register the session before the page makes its first API call
    state.sessions.write().await.create_session(&session_id);
    tracing::debug!("New chat session: {}", session_id);

    let html = state.prompts.render_chat_page(&session_id)?;
    Ok(Html(html))
}

pub async fn chat_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    index(State(state)).await
}
