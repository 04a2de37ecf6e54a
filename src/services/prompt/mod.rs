//! Prompt assembly from MiniJinja templates

mod engine;
mod templates;

pub use engine::PromptEngine;
