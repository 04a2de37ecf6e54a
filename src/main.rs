use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use openchat_bot::{state, web};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openchat_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🚀 Starting OpenChat Bot");

    // Create application state (config, provider client, sessions, templates)
    let app_state = state::AppState::new().await?;

    // Start web server
    web::start_server(app_state).await?;

    Ok(())
}
