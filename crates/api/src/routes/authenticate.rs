//! Dashboard login endpoint.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use content_store::ContentStore;
use serde::Serialize;

use crate::auth::Credentials;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
}

/// POST /api/authenticate — check a `{"username", "password"}` body.
///
/// Issues no session; the dashboard keeps sending Basic-Auth on every
/// mutating request.
#[tracing::instrument(skip(state, body))]
pub async fn login<S: ContentStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    body: Bytes,
) -> Result<(StatusCode, Json<LoginResponse>), ApiError> {
    let credentials: Credentials = super::parse_json(&body)?;

    if state.authenticator.authenticate(&credentials) {
        tracing::info!(username = %credentials.username, "dashboard login");
        Ok((StatusCode::OK, Json(LoginResponse { success: true })))
    } else {
        metrics::counter!("auth_failures_total").increment(1);
        tracing::warn!(username = %credentials.username, "rejected dashboard login");
        Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse { success: false }),
        ))
    }
}
