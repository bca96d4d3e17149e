//! Content document endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use content::ContentDocument;
use content_store::ContentStore;
use serde::Serialize;

use crate::auth::Admin;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UpdateResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/content — the current document. Public.
#[tracing::instrument(skip(state))]
pub async fn get<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Json<ContentDocument> {
    Json(state.store.get().await)
}

/// POST /api/content — replace the whole document and persist it.
///
/// Fields missing from the body are reset to empty values; the previous
/// document is never merged in.
#[tracing::instrument(skip(state, body), fields(user = %admin.username))]
pub async fn replace<S: ContentStore + 'static>(
    admin: Admin,
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<Json<UpdateResponse>, ApiError> {
    let document: ContentDocument = super::parse_json(&body)?;

    if let Err(err) = state.store.replace(document).await {
        metrics::counter!("content_update_failures_total").increment(1);
        return Err(err.into());
    }

    metrics::counter!("content_updates_total").increment(1);
    tracing::info!("content document updated");

    Ok(Json(UpdateResponse {
        status: "success",
        message: "Content updated successfully",
    }))
}
