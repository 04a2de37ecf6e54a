//! Session command endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetRequest {
    session_id: String,
}

#[derive(Debug, Serialize)]
pub struct SystemStatus {
    server: String,
    provider: String,
    model: String,
    sessions: usize,
    requests_processed: usize,
    requests_failed: usize,
    avg_latency_ms: u64,
    uptime_seconds: u64,
}

/// Clear a session's conversation context
pub async fn reset_context(
    State(state): State<AppState>,
    Json(req): Json<ResetRequest>,
) -> StatusCode {
    let mut sessions = state.sessions.write().await;
    match sessions.get_mut(&req.session_id) {
        Some(session) => {
            session.clear();
            tracing::info!("Context reset for session {}", req.session_id);
            StatusCode::OK
        }
        None => StatusCode::NOT_FOUND,
    }
}

/// Server and provider status snapshot
pub async fn system_status(State(state): State<AppState>) -> Json<SystemStatus> {
    let sessions = state.sessions.read().await;
    let stats = state.metrics.get_stats();

    Json(SystemStatus {
        server: "Running".to_string(),
        provider: state.config.provider.as_str().to_string(),
        model: state.config.model.clone(),
        sessions: sessions.count(),
        requests_processed: stats.requests_processed,
        requests_failed: stats.requests_failed,
        avg_latency_ms: stats.avg_latency_ms,
        uptime_seconds: stats.uptime_seconds,
    })
}
