//! File analysis endpoints: multipart upload and image-URL variants

use axum::extract::{Multipart, State};
use axum::Json;
use std::time::Instant;
use url::Url;

use crate::services::flows::{self, AnalyzeFileInput};
use crate::state::AppState;
use crate::types::errors::AppError;
use crate::types::message::{AnalyzeResponse, AnalyzeUrlRequest};

const ALLOWED_FILE_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf", "text/plain"];

fn is_supported(content_type: &str) -> bool {
    ALLOWED_FILE_TYPES.contains(&content_type)
}

pub async fn analyze_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let started = Instant::now();

    // (name, content type, bytes)
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut message = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        // Owned copy: consuming the field below invalidates borrowed names
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((file_name, content_type, bytes.to_vec()));
            }
            Some("message") => {
                message = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            _ => {}
        }
    }

    let (file_name, content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("No file uploaded".to_string()))?;

    if !is_supported(&content_type) {
        tracing::warn!("Rejected upload '{}' with type {}", file_name, content_type);
        return Err(AppError::UnsupportedFileType);
    }

    // Text files carry their content into the prompt; binary files are
    // described by name and type only.
    let file_content = if content_type == "text/plain" {
        Some(String::from_utf8_lossy(&bytes).into_owned())
    } else {
        None
    };

    tracing::info!(
        "📎 Analyzing {} ({}, {} bytes), message: '{}'",
        file_name,
        content_type,
        bytes.len(),
        message
    );

    let output = flows::analyze_file(
        &state.llm,
        &state.prompts,
        AnalyzeFileInput {
            file_url: &file_name,
            file_type: &content_type,
            file_content: file_content.as_deref(),
        },
    )
    .await
    .map_err(|e| {
        state.metrics.record_failure();
        e
    })?;

    state.metrics.record_request(started.elapsed().as_millis() as u64);
    Ok(Json(AnalyzeResponse {
        analysis: output.analysis,
    }))
}

pub async fn analyze_url(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeUrlRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let started = Instant::now();

    let url = Url::parse(&req.file_url).map_err(|_| AppError::InvalidUrl(req.file_url.clone()))?;
    let file_type = req.file_type.as_deref().unwrap_or("image");

    tracing::info!("🔗 Analyzing URL {} as {}", url, file_type);

    let output = flows::analyze_file(
        &state.llm,
        &state.prompts,
        AnalyzeFileInput {
            file_url: url.as_str(),
            file_type,
            file_content: None,
        },
    )
    .await
    .map_err(|e| {
        state.metrics.record_failure();
        e
    })?;

    state.metrics.record_request(started.elapsed().as_millis() as u64);
    Ok(Json(AnalyzeResponse {
        analysis: output.analysis,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_types_pass() {
        for t in ["image/jpeg", "image/png", "application/pdf", "text/plain"] {
            assert!(is_supported(t), "{} should be allowed", t);
        }
    }

    #[test]
    fn everything_else_is_rejected() {
        for t in ["image/gif", "application/zip", "video/mp4", "text/html"] {
            assert!(!is_supported(t), "{} should be rejected", t);
        }
    }
}
