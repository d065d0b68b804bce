//! Persistence collaborator for content records.
//!
//! The content model only needs to read and write a record's raw content;
//! everything here is a plain keyed store with last-writer-wins semantics.

pub mod file_store;
pub mod memory_store;

use std::path::PathBuf;

use crate::models::{Catalog, ContentRecord, RecordKey};

pub use file_store::{FileStore, validate_content_dir};
pub use memory_store::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(RecordKey),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Corrupt record file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to encode record {key}: {source}")]
    Encode {
        key: RecordKey,
        source: serde_json::Error,
    },
    #[error("Invalid content directory: {0}")]
    InvalidStoreRoot(String),
}

/// Keyed storage of whole content records.
///
/// `put` replaces any existing record with the same key.
pub trait ContentStore {
    fn get(&self, key: &RecordKey) -> Result<ContentRecord, StoreError>;
    fn put(&mut self, record: ContentRecord) -> Result<(), StoreError>;
    fn delete(&mut self, key: &RecordKey) -> Result<(), StoreError>;
    fn list(&self) -> Result<Catalog, StoreError>;
}
