//! Stored message shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: String,
    pub content: String,
    /// Set when the content is the inner text of a fenced code block.
    pub code_language: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new_user(content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: "user".to_string(),
            content,
            code_language: None,
            timestamp: Utc::now(),
        }
    }

    pub fn new_assistant(content: String, code_language: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role: "assistant".to_string(),
            content,
            code_language,
            timestamp: Utc::now(),
        }
    }
}
