//! Gallery image upload endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use content_store::ContentStore;
use serde::Serialize;

use crate::auth::Admin;
use crate::error::ApiError;
use crate::state::AppState;

/// Multipart field carrying the image.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub image_path: String,
}

/// POST /api/upload-image — store the `image` field under its own filename.
#[tracing::instrument(skip(state, multipart), fields(user = %admin.username))]
pub async fn image<S: ContentStore + 'static>(
    admin: Admin,
    State(state): State<Arc<AppState<S>>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_owned) else {
            break;
        };
        let bytes = field.bytes().await?;

        let image_path = state.uploads.store(&filename, &bytes).await?;
        metrics::counter!("image_uploads_total").increment(1);
        metrics::counter!("image_upload_bytes_total").increment(bytes.len() as u64);

        return Ok(Json(UploadResponse {
            status: "success",
            message: "Image uploaded successfully",
            image_path,
        }));
    }

    Err(ApiError::BadRequest("Error retrieving file".to_string()))
}
