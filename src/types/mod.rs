pub mod errors;
pub mod message;
pub mod session;

pub use errors::AppError;
pub use message::{ChatRequest, ChatResponse};
pub use session::ChatMessage;
