use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::Instrument;

use crate::{ContentDocument, ContentStoreError, Result, store::ContentStore};

/// JSON-file-backed content store.
///
/// The document lives in memory behind a single lock and is written back to
/// `path` on every replace. The write lock is held while persisting, so
/// concurrent replaces are serialized. Persisting and swapping run on a
/// spawned task: dropping the caller's future does not stop it halfway, so
/// the file and the in-memory copy never disagree.
pub struct FileContentStore {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    document: RwLock<ContentDocument>,
}

impl FileContentStore {
    /// Opens the store at `path`.
    ///
    /// If no file exists, the store is seeded with the built-in document and
    /// that document is persisted immediately. An existing file that cannot
    /// be read or parsed is an error; the store never silently replaces it.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let (document, seeded) = match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let document = serde_json::from_slice(&bytes).map_err(|source| {
                    ContentStoreError::Corrupt {
                        path: path.clone(),
                        source,
                    }
                })?;
                (document, false)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => (ContentDocument::builtin(), true),
            Err(source) => return Err(ContentStoreError::Read { path, source }),
        };

        let store = Self {
            inner: Arc::new(Inner {
                path,
                document: RwLock::new(document),
            }),
        };
        if seeded {
            store.save().await?;
            tracing::info!("no content file found, seeded built-in document");
        }
        Ok(store)
    }

    /// Writes the current document back to disk.
    pub async fn save(&self) -> Result<()> {
        let inner = self.inner.clone();
        tokio::spawn(
            async move {
                let document = inner.document.read().await;
                persist(&inner.path, &document).await
            }
            .in_current_span(),
        )
        .await?
    }
}

#[async_trait]
impl ContentStore for FileContentStore {
    async fn get(&self) -> ContentDocument {
        self.inner.document.read().await.clone()
    }

    #[tracing::instrument(skip_all, fields(path = %self.inner.path.display()))]
    async fn replace(&self, document: ContentDocument) -> Result<()> {
        let inner = self.inner.clone();
        tokio::spawn(
            async move {
                let mut current = inner.document.write().await;
                persist(&inner.path, &document).await?;
                *current = document;
                tracing::debug!("content document replaced");
                Ok::<(), ContentStoreError>(())
            }
            .in_current_span(),
        )
        .await?
    }
}

/// Serializes `document` with two-space indentation and swaps it into place.
///
/// The bytes go to a sibling temp file first and are renamed over `path`, so
/// a crash mid-write leaves the previous file intact.
async fn persist(path: &Path, document: &ContentDocument) -> Result<()> {
    let json = serde_json::to_vec_pretty(document)?;
    let temp = temp_path(path);

    let write_err = |source: std::io::Error| ContentStoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    tokio::fs::write(&temp, &json).await.map_err(write_err)?;
    if let Err(source) = tokio::fs::rename(&temp, path).await {
        let _ = tokio::fs::remove_file(&temp).await;
        return Err(write_err(source));
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("content"));
    name.push(".tmp");
    path.with_file_name(name)
}
