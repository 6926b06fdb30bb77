//! Application startup and lifecycle management.

use crate::config::GatewayConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::providers::TextProvider;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn TextProvider>,
}

/// Build the gateway router.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/generate-srs", post(handlers::generate_srs))
        .route("/generate-brd", post(handlers::generate_brd))
        .route("/generate-frs", post(handlers::generate_frs))
        .route("/generate-user-stories", post(handlers::generate_user_stories))
        .route("/generate-doc", post(handlers::generate_doc))
        .route("/generate-doc/image", post(handlers::generate_doc_image))
        .route("/generate-doc/document", post(handlers::generate_doc_document))
        .route("/list-models", get(handlers::list_models))
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Bind the listener and assemble shared state. Port 0 requests a
    /// random port, used by the integration tests.
    pub async fn build(
        config: &GatewayConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState { provider };

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, app_router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
