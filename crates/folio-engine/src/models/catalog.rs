use std::collections::BTreeMap;

use super::record::{ContentKind, ContentRecord, RecordKey};

/// A stored record as it appears in a listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: RecordKey,
    pub title: String,
}

impl From<&ContentRecord> for CatalogEntry {
    fn from(record: &ContentRecord) -> Self {
        Self {
            key: record.key.clone(),
            title: record.display_title().to_string(),
        }
    }
}

/// Listing of stored records.
///
/// Uses BTreeMap so entries come out grouped by kind, then sorted by slug.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: BTreeMap<RecordKey, CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single entry, replacing any entry with the same key
    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Get all entries in kind, then slug order
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Entries of one kind only
    pub fn of_kind(&self, kind: ContentKind) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values().filter(move |entry| entry.key.kind == kind)
    }

    pub fn get(&self, key: &RecordKey) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove a single entry
    ///
    /// Returns the removed entry if it existed
    pub fn remove(&mut self, key: &RecordKey) -> Option<CatalogEntry> {
        self.entries.remove(key)
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for entry in iter {
            catalog.add(entry);
        }
        catalog
    }
}
