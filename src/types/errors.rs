//! Application error type shared by all request handlers.
//!
//! Every failure surfaces as a JSON `{"error": ...}` body; nothing here is
//! fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::services::llm::LlmError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Provider(#[from] LlmError),

    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFileType | AppError::InvalidUrl(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Provider(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!("Request failed ({}): {}", status, self);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_file_type_is_client_fault() {
        let err = AppError::UnsupportedFileType;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Unsupported file type");
    }

    #[test]
    fn provider_failures_are_server_fault() {
        let err = AppError::Provider(LlmError::Api {
            status: 429,
            message: "quota".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_url_is_client_fault() {
        assert_eq!(
            AppError::InvalidUrl("not a url".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }
}
