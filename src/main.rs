use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mail_assist::{
    api::{self, AppState},
    config::Config,
    inference::GeminiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -----------------------------
    // Config
    // -----------------------------
    let config = Config::from_env()?;

    if !config.api_key_configured() {
        tracing::error!("GEMINI_API_KEY not found in environment variables");
        tracing::warn!("create a .env file with GEMINI_API_KEY; generation requests will fail until then");
    }

    // -----------------------------
    // Shared state
    // -----------------------------
    let state = AppState {
        generator: Arc::new(GeminiClient::from_config(&config)),
        api_key_configured: config.api_key_configured(),
    };

    let app = api::app(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Backend server running on http://localhost:{}", config.port);
    tracing::info!(model = %config.model, "API Key configured: {}", config.api_key_configured());

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
