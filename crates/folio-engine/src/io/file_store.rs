use std::fs;
use std::path::{Path, PathBuf};

use relative_path::RelativePath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{ContentStore, StoreError};
use crate::content::RawContent;
use crate::models::{Catalog, CatalogEntry, ContentKind, ContentRecord, RecordKey};

/// On-disk body of a record file.
#[derive(Debug, Serialize, Deserialize)]
struct RecordFile {
    id: Uuid,
    #[serde(default)]
    title: String,
    #[serde(default)]
    content: Value,
}

/// Stores each record as `<root>/<kind-dir>/<slug>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens an existing content directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        validate_content_dir(&root)?;
        Ok(Self { root })
    }

    /// Opens a content directory, creating it first if needed.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &RecordKey) -> PathBuf {
        key.relative_path().to_path(&self.root)
    }

    fn read_record(&self, key: &RecordKey) -> Result<ContentRecord, StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Err(StoreError::NotFound(key.clone()));
        }

        let text = fs::read_to_string(&path)?;
        let file: RecordFile =
            serde_json::from_str(&text).map_err(|source| StoreError::Corrupt { path, source })?;

        Ok(ContentRecord {
            id: file.id,
            key: key.clone(),
            title: file.title,
            content: RawContent::from(file.content),
        })
    }

    fn keys_of_kind(&self, kind: ContentKind) -> Result<Vec<RecordKey>, StoreError> {
        let dir = self.root.join(kind.dir_name());
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            let relative = format!("{}/{file_name}", kind.dir_name());
            if let Some(key) = RecordKey::from_relative_path(RelativePath::new(&relative)) {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}

impl ContentStore for FileStore {
    fn get(&self, key: &RecordKey) -> Result<ContentRecord, StoreError> {
        self.read_record(key)
    }

    fn put(&mut self, record: ContentRecord) -> Result<(), StoreError> {
        let path = self.path_for(&record.key);

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let file = RecordFile {
            id: record.id,
            title: record.title,
            content: record.content.into_value(),
        };
        let body = serde_json::to_string_pretty(&file).map_err(|source| StoreError::Encode {
            key: record.key.clone(),
            source,
        })?;

        fs::write(&path, body)?;
        log::info!("saved {} to {}", record.key, path.display());
        Ok(())
    }

    fn delete(&mut self, key: &RecordKey) -> Result<(), StoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Err(StoreError::NotFound(key.clone()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    /// Lists every readable record; unreadable files are logged and skipped.
    fn list(&self) -> Result<Catalog, StoreError> {
        let mut catalog = Catalog::new();
        for kind in ContentKind::ALL {
            for key in self.keys_of_kind(kind)? {
                match self.read_record(&key) {
                    Ok(record) => catalog.add(CatalogEntry::from(&record)),
                    Err(e) => log::warn!("skipping {key}: {e}"),
                }
            }
        }
        Ok(catalog)
    }
}

pub fn validate_content_dir(path: &Path) -> Result<(), StoreError> {
    if !path.exists() || !path.is_dir() {
        return Err(StoreError::InvalidStoreRoot(format!(
            "{} does not exist or is not a directory",
            path.display()
        )));
    }

    Ok(())
}
