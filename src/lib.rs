// Core modules
pub mod config;
pub mod services;
pub mod state;
pub mod types;
pub mod web;

// Re-exports
pub use services::llm::Provider;
pub use services::prompt::PromptEngine;
pub use state::AppState;
