use llm_service::config::GatewayConfig;
use llm_service::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use llm_service::services::providers::TextProvider;
use llm_service::startup::Application;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GatewayConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let gemini_config = GeminiConfig {
        api_key: config.gemini.api_key.clone(),
        model: config.gemini.model.clone(),
    };
    let provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

    tracing::info!(
        model = %config.gemini.model,
        "Initialized Gemini text provider"
    );

    let app = Application::build(&config, provider).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    tracing::info!("LLM service listening on port {}", app.port());

    app.run_until_stopped().await
}
