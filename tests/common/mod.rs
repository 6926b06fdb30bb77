//! Shared test helpers: spawn the gateway on a random port with a mock
//! provider behind it.

use llm_service::config::{CommonConfig, GatewayConfig, GeminiSettings};
use llm_service::services::providers::TextProvider;
use llm_service::startup::Application;
use std::sync::Arc;

pub async fn spawn_app(provider: Arc<dyn TextProvider>) -> u16 {
    let config = GatewayConfig {
        common: CommonConfig { port: 0 },
        gemini: GeminiSettings {
            api_key: "test-api-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
        },
    };

    let app = Application::build(&config, provider)
        .await
        .expect("Failed to build application");
    let port = app.port();

    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}
