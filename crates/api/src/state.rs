//! Shared application state.

use std::path::PathBuf;
use std::sync::Arc;

use content_store::ContentStore;

use crate::auth::Authenticator;
use crate::uploads::UploadDir;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ContentStore> {
    pub store: S,
    pub authenticator: Arc<dyn Authenticator>,
    pub uploads: UploadDir,
    /// Directory holding `index.html`, `dashboard.html` and other site assets.
    pub static_dir: PathBuf,
}
