use crate::config::Config;
use crate::services::llm::Provider;
use crate::services::prompt::PromptEngine;
use crate::services::{MetricsService, SessionManager};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<Provider>,
    pub sessions: Arc<RwLock<SessionManager>>,
    pub prompts: Arc<PromptEngine>,
    pub metrics: Arc<MetricsService>,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        tracing::info!("[STATE] Initializing AppState...");
        let config = Config::from_env()?;
        tracing::info!("[STATE] Config loaded:");
        tracing::info!("[STATE]   Provider: {}", config.provider.as_str());
        tracing::info!("[STATE]   Model: {}", config.model);

        if config.api_key.is_none() {
            tracing::warn!("[STATE] ⚠️ No API key configured — chat requests will fail until one is set");
        } else {
            tracing::info!("[STATE] ✅ Provider credentials present");
        }

        let llm = Provider::from_config(&config);
        let prompts = PromptEngine::new()?;

        Ok(Self {
            config: Arc::new(config),
            llm: Arc::new(llm),
            sessions: Arc::new(RwLock::new(SessionManager::new())),
            prompts: Arc::new(prompts),
            metrics: Arc::new(MetricsService::new()),
        })
    }
}
