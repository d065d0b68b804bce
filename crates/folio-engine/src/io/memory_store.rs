use std::collections::BTreeMap;

use super::{ContentStore, StoreError};
use crate::models::{Catalog, CatalogEntry, ContentRecord, RecordKey};

/// In-memory store, for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<RecordKey, ContentRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContentStore for MemoryStore {
    fn get(&self, key: &RecordKey) -> Result<ContentRecord, StoreError> {
        self.records
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.clone()))
    }

    fn put(&mut self, record: ContentRecord) -> Result<(), StoreError> {
        self.records.insert(record.key.clone(), record);
        Ok(())
    }

    fn delete(&mut self, key: &RecordKey) -> Result<(), StoreError> {
        self.records
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(key.clone()))
    }

    fn list(&self) -> Result<Catalog, StoreError> {
        Ok(self.records.values().map(CatalogEntry::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RawContent;
    use crate::models::ContentKind;

    fn key(slug: &str) -> RecordKey {
        RecordKey::new(ContentKind::BlogPost, slug).unwrap()
    }

    #[test]
    fn put_then_get() {
        let mut store = MemoryStore::new();
        let record = ContentRecord::new(key("hello"), "Hello", RawContent::from("Hi."));
        store.put(record.clone()).unwrap();

        assert_eq!(store.get(&key("hello")).unwrap(), record);
    }

    #[test]
    fn last_writer_wins() {
        let mut store = MemoryStore::new();
        store
            .put(ContentRecord::new(key("a"), "First", RawContent::from("one")))
            .unwrap();
        store
            .put(ContentRecord::new(key("a"), "Second", RawContent::from("two")))
            .unwrap();

        let record = store.get(&key("a")).unwrap();
        assert_eq!(record.title, "Second");
        assert_eq!(record.content, RawContent::from("two"));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn missing_records_are_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.get(&key("x")), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(&key("x")), Err(StoreError::NotFound(_))));
    }
}
