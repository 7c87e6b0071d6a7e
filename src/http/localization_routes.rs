//! Localization HTTP Routes
//!
//! Serves the flattened key→value map for a locale, the shape consuming
//! applications load at startup.

use std::collections::BTreeMap;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::ApiResult;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct LocalizationsResponse {
    pub project_id: String,
    pub locale: String,
    pub localizations: BTreeMap<String, String>,
}

/// Create localization routes
pub fn localization_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/localizations/{project_id}/{locale}",
            get(get_localizations_handler),
        )
        .with_state(state)
}

/// `project_id` is echoed back but never used to filter; project scoping
/// is a documented non-feature of this service.
async fn get_localizations_handler(
    State(state): State<AppState>,
    Path((project_id, locale)): Path<(String, String)>,
) -> ApiResult<Json<LocalizationsResponse>> {
    let localizations = state.store.localizations(&locale).await?;

    tracing::info!(
        count = localizations.len(),
        %project_id,
        %locale,
        "retrieved localizations"
    );

    Ok(Json(LocalizationsResponse {
        project_id,
        locale,
        localizations,
    }))
}
