//! Document persistence.
//!
//! Users and exercises live in two independent JSONL collections under the
//! data directory, linked only by the id list stored inside each user
//! record. [`DocumentStore`] loads both collections at startup, serves
//! reads from memory, and writes through to disk on every mutation.

use std::path::PathBuf;
use thiserror::Error;

mod jsonl;
mod store;

pub use jsonl::{Collection, JsonlReader, JsonlWriter};
pub use store::DocumentStore;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    /// Path of a collection file under the data directory.
    pub fn collection_path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.filename())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}
