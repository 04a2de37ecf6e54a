use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(super::handlers::chat::index))
        .route("/chat", get(super::handlers::chat::chat_page))
        // API endpoints
        .route("/api/chat", post(super::handlers::api::send_message))
        .route("/api/generate-code", post(super::handlers::api::generate_code))
        .route("/api/summarize", post(super::handlers::api::summarize))
        .route("/api/analyze-file", post(super::handlers::files::analyze_file))
        .route("/api/analyze-url", post(super::handlers::files::analyze_url))
        // Session commands
        .route("/api/reset-context", post(super::handlers::commands::reset_context))
        .route("/api/status", get(super::handlers::commands::system_status))
        // Health check
        .route("/health", get(super::handlers::health::health_check))
        .with_state(state)
}
