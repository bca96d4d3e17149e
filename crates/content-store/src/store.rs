use async_trait::async_trait;

use crate::{ContentDocument, Result};

/// Core trait for content store implementations.
///
/// A store owns exactly one [`ContentDocument`]. Reads return a snapshot;
/// writes replace the whole document. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Returns a snapshot of the current document.
    async fn get(&self) -> ContentDocument;

    /// Replaces the current document wholesale.
    ///
    /// Replacement is atomic: if the implementation persists the document and
    /// persisting fails, the previous document stays in place and the error
    /// is returned.
    async fn replace(&self, document: ContentDocument) -> Result<()>;
}
