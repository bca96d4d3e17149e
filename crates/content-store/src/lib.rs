pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use content::ContentDocument;
pub use error::{ContentStoreError, Result};
pub use file::FileContentStore;
pub use memory::InMemoryContentStore;
pub use store::ContentStore;
