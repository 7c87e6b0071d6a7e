//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::store::TranslationStore;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::key_routes::key_routes;
use super::localization_routes::localization_routes;
use super::translation_routes::translation_routes;
use super::AppState;

/// HTTP server for the localization API
pub struct HttpServer {
    config: HttpServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a server over an already-connected store.
    pub fn new(config: HttpServerConfig, store: TranslationStore) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    /// Build the combined router with all endpoints.
    pub fn router(&self) -> Router {
        build_router(&self.config, self.state.clone())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Serve until shutdown (ctrl-c), then close the store pool.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {}", e),
            )
        })?;

        let router = self.router();
        tracing::info!(%addr, "localization API listening");

        let listener = TcpListener::bind(addr).await?;

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("shutting down, closing store pool");
        self.state.store.close().await;
        Ok(())
    }
}

/// Build the application router over the given state.
///
/// Also used directly by integration tests, which drive the router without
/// binding a socket.
pub fn build_router(config: &HttpServerConfig, state: AppState) -> Router {
    let cors = if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health_routes(state.clone()))
        .merge(key_routes(state.clone()))
        .merge(translation_routes(state.clone()))
        .merge(localization_routes(state))
        .layer(cors)
}

async fn shutdown_signal() {
    // Serve forever if the signal handler cannot be installed.
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
}
