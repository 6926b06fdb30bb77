//! Integration tests for the health and model-listing endpoints.

mod common;

use common::spawn_app;
use llm_service::services::providers::mock::MockTextProvider;
use reqwest::Client;
use std::sync::Arc;

#[tokio::test]
async fn health_check_returns_healthy() {
    let port = spawn_app(Arc::new(MockTextProvider::new(true))).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "LLM Service");
}

#[tokio::test]
async fn list_models_relays_names_in_order() {
    let provider = MockTextProvider::new(true).with_models(vec![
        "models/gemini-1.5-flash".to_string(),
        "models/gemini-1.5-pro".to_string(),
        "models/embedding-001".to_string(),
    ]);
    let port = spawn_app(Arc::new(provider)).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/list-models", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["models"],
        serde_json::json!([
            "models/gemini-1.5-flash",
            "models/gemini-1.5-pro",
            "models/embedding-001"
        ])
    );
}

#[tokio::test]
async fn list_models_failure_surfaces_as_error_payload() {
    let port = spawn_app(Arc::new(MockTextProvider::new(false))).await;
    let client = Client::new();

    let response = client
        .get(format!("http://localhost:{}/list-models", port))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 502);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert!(body["error"].as_str().unwrap().contains("not enabled"));
    assert!(body.get("models").is_none());
}
