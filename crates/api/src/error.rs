//! API error types with HTTP response mapping.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use content_store::ContentStoreError;

use crate::uploads::UploadError;

/// API-level error type that maps to HTTP responses.
///
/// Every variant renders as a plain-text body carrying only the error
/// message.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest(String),
    /// Missing or invalid credentials.
    Unauthorized,
    /// Request body larger than the route accepts.
    PayloadTooLarge(String),
    /// Content store failure.
    Store(ContentStoreError),
    /// Upload storage failure.
    Upload(UploadError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
            ApiError::Store(err) => {
                tracing::error!(error = %err, "content store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save content".to_string(),
                )
            }
            ApiError::Upload(err) => upload_error_to_response(err),
        };

        (status, message).into_response()
    }
}

fn upload_error_to_response(err: UploadError) -> (StatusCode, String) {
    match &err {
        UploadError::InvalidFilename(_) => (StatusCode::BAD_REQUEST, err.to_string()),
        UploadError::TooLarge { .. } => (StatusCode::PAYLOAD_TOO_LARGE, err.to_string()),
        UploadError::CreateDir { .. } | UploadError::Write { .. } => {
            tracing::error!(error = %err, "upload storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error saving file".to_string(),
            )
        }
    }
}

impl From<ContentStoreError> for ApiError {
    fn from(err: ContentStoreError) -> Self {
        ApiError::Store(err)
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        ApiError::Upload(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(err.body_text())
        } else {
            ApiError::BadRequest(err.body_text())
        }
    }
}
