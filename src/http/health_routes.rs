//! Health HTTP Routes
//!
//! Root API-info endpoint and the store connectivity probe. Health always
//! responds 200; degraded connectivity is reported in the body, never as a
//! crash.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes
pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Root endpoint with API information
async fn root_handler() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        message: "Localization Management API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
    })
}

/// Health check handler
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    match state.store.ping().await {
        Ok(()) => Json(HealthResponse {
            status: "healthy".to_string(),
            database: "connected".to_string(),
            timestamp: Utc::now(),
            error: None,
        }),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            Json(HealthResponse {
                status: "unhealthy".to_string(),
                database: "disconnected".to_string(),
                timestamp: Utc::now(),
                error: Some(e.to_string()),
            })
        }
    }
}
