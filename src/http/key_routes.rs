//! Translation Key HTTP Routes
//!
//! Listing (with search/category filters and pagination) and single-key
//! lookup. Key creation and deletion are data-loading operations and are
//! not routed.

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::store::{KeyFilter, TranslationKey};
use crate::validation;

use super::AppState;

// ==================
// Request/Response Types
// ==================

/// Raw query parameters; pagination is parsed and bounds-checked by the
/// validation layer so malformed values get field-level messages.
#[derive(Debug, Deserialize)]
pub struct ListKeysQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct KeyListResponse {
    pub items: Vec<TranslationKey>,
    pub total: i64,
}

// ==================
// Routes
// ==================

/// Create translation-key routes
pub fn key_routes(state: AppState) -> Router {
    Router::new()
        .route("/translation-keys", get(list_keys_handler))
        .route("/translation-keys/{key_id}", get(get_key_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_keys_handler(
    State(state): State<AppState>,
    Query(query): Query<ListKeysQuery>,
) -> ApiResult<Json<KeyListResponse>> {
    let page = validation::parse_pagination(query.limit.as_deref(), query.offset.as_deref())?;
    let filter = KeyFilter {
        search: query.search,
        category: query.category,
    };

    let result = state.store.list_keys(&filter, page).await?;
    tracing::info!(count = result.items.len(), total = result.total, "listed translation keys");

    Ok(Json(KeyListResponse {
        items: result.items,
        total: result.total,
    }))
}

async fn get_key_handler(
    State(state): State<AppState>,
    Path(key_id): Path<String>,
) -> ApiResult<Json<TranslationKey>> {
    let key = state.store.get_key(&key_id).await?;
    tracing::info!(key = %key.key, "retrieved translation key");
    Ok(Json(key))
}
