pub mod flows;
pub mod intent;
pub mod llm;
mod metrics;
pub mod prompt;
pub mod search;
mod session;

pub use metrics::MetricsService;
pub use session::{ConversationHistory, Session, SessionManager};
