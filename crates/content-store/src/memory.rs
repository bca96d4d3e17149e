use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{ContentDocument, Result, store::ContentStore};

/// In-memory content store for testing.
///
/// Holds the document behind the same kind of lock as [`crate::FileContentStore`]
/// but never touches the filesystem, so `replace` cannot fail.
#[derive(Clone)]
pub struct InMemoryContentStore {
    document: Arc<RwLock<ContentDocument>>,
}

impl InMemoryContentStore {
    /// Creates a store holding the built-in document.
    pub fn new() -> Self {
        Self::with_document(ContentDocument::builtin())
    }

    /// Creates a store holding the given document.
    pub fn with_document(document: ContentDocument) -> Self {
        Self {
            document: Arc::new(RwLock::new(document)),
        }
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn get(&self) -> ContentDocument {
        self.document.read().await.clone()
    }

    async fn replace(&self, document: ContentDocument) -> Result<()> {
        *self.document.write().await = document;
        Ok(())
    }
}
