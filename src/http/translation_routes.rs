//! Translation HTTP Routes
//!
//! Single-value update and the bulk update endpoint. Bulk entries are
//! applied independently; the endpoint responds 200 with a per-entry
//! result map even when some or all entries fail.

use axum::extract::{Path, State};
use axum::routing::put;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiResult;
use crate::store::{BulkEntryOutcome, Translation};
use crate::validation;

use super::AppState;

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct TranslationUpdateRequest {
    pub value: String,
    #[serde(default = "default_updated_by")]
    pub updated_by: String,
}

fn default_updated_by() -> String {
    "user".to_string()
}

#[derive(Debug, Deserialize)]
pub struct BulkTranslationUpdateRequest {
    /// Mapping of translation id → new value. `serde_json` is built with
    /// `preserve_order`, so the result map mirrors the caller's key order.
    pub updates: Map<String, Value>,
    #[serde(default = "default_bulk_updated_by")]
    pub updated_by: String,
}

fn default_bulk_updated_by() -> String {
    "bulk_user".to_string()
}

#[derive(Debug, Serialize)]
pub struct BulkSummary {
    pub total_attempted: usize,
    pub successful_updates: usize,
    pub failed_updates: usize,
}

#[derive(Debug, Serialize)]
pub struct BulkUpdateResponse {
    pub success: bool,
    pub message: String,
    pub summary: BulkSummary,
    pub results: Map<String, Value>,
    pub updated_by: String,
    pub timestamp: DateTime<Utc>,
}

// ==================
// Routes
// ==================

/// Create translation routes
pub fn translation_routes(state: AppState) -> Router {
    Router::new()
        // Static segment wins over the capture, so "bulk" is never
        // treated as a translation id.
        .route("/translations/bulk", put(bulk_update_handler))
        .route("/translations/{translation_id}", put(update_translation_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn update_translation_handler(
    State(state): State<AppState>,
    Path(translation_id): Path<String>,
    Json(request): Json<TranslationUpdateRequest>,
) -> ApiResult<Json<Translation>> {
    validation::non_empty(&request.value, "value")?;

    let translation = state
        .store
        .update_translation(&translation_id, &request.value, &request.updated_by)
        .await?;

    tracing::info!(
        translation_id,
        updated_by = %translation.updated_by,
        "updated translation"
    );
    Ok(Json(translation))
}

async fn bulk_update_handler(
    State(state): State<AppState>,
    Json(request): Json<BulkTranslationUpdateRequest>,
) -> ApiResult<Json<BulkUpdateResponse>> {
    let entries = validation::bulk_updates(&request.updates)?;

    let outcome = state.store.bulk_update(&entries, &request.updated_by).await;
    tracing::info!(
        successful = outcome.successful,
        failed = outcome.failed,
        "bulk update completed"
    );

    let mut results = Map::new();
    for (translation_id, entry) in &outcome.entries {
        let value = match entry {
            BulkEntryOutcome::Updated(translation) => serde_json::json!({
                "success": true,
                "value": translation.value,
            }),
            BulkEntryOutcome::Failed { error } => serde_json::json!({
                "success": false,
                "error": error,
            }),
        };
        results.insert(translation_id.clone(), value);
    }

    Ok(Json(BulkUpdateResponse {
        success: true,
        message: "Bulk update completed".to_string(),
        summary: BulkSummary {
            total_attempted: outcome.total_attempted(),
            successful_updates: outcome.successful,
            failed_updates: outcome.failed,
        },
        results,
        updated_by: request.updated_by,
        timestamp: Utc::now(),
    }))
}
