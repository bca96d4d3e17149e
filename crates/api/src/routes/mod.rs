pub mod authenticate;
pub mod content;
pub mod health;
pub mod metrics;
pub mod upload;

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Parses a JSON request body, ignoring the declared content type.
fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected request body");
        ApiError::BadRequest("Invalid request body".to_string())
    })
}
