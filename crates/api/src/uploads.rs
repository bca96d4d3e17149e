//! Storage for gallery image uploads.

use std::path::{Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use thiserror::Error;

/// Largest accepted image, in bytes (10 MiB).
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// URL prefix under which stored uploads are served.
pub const UPLOADS_ROUTE: &str = "/uploads";

/// Bytes that cannot appear raw in a URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Errors that can occur while storing an upload.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The client filename has no usable final component.
    #[error("Invalid file name: {0:?}")]
    InvalidFilename(String),

    /// The file is larger than [`MAX_UPLOAD_BYTES`].
    #[error("File exceeds the {limit} byte upload limit")]
    TooLarge { limit: usize },

    /// The uploads directory could not be created.
    #[error("Failed to create uploads directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file could not be written.
    #[error("Failed to write uploaded file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Directory that uploaded images are written to.
#[derive(Debug, Clone)]
pub struct UploadDir {
    root: PathBuf,
}

impl UploadDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes `bytes` under the final component of `filename` and returns the
    /// public path of the stored file, percent-encoded so it fetches back the
    /// same file.
    ///
    /// The directory is created on first use. An existing file with the same
    /// name is overwritten.
    pub async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, UploadError> {
        let name = file_name(filename)
            .ok_or_else(|| UploadError::InvalidFilename(filename.to_string()))?;
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge {
                limit: MAX_UPLOAD_BYTES,
            });
        }

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|source| UploadError::CreateDir {
                path: self.root.clone(),
                source,
            })?;

        let path = self.root.join(name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| UploadError::Write {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), bytes = bytes.len(), "stored upload");
        Ok(public_path(name))
    }
}

fn public_path(name: &str) -> String {
    format!("{UPLOADS_ROUTE}/{}", utf8_percent_encode(name, PATH_SEGMENT))
}

/// Final path component of a client-supplied filename.
fn file_name(raw: &str) -> Option<&str> {
    Path::new(raw).file_name()?.to_str()
}
