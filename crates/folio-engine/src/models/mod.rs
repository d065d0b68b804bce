pub mod catalog;
pub mod record;

pub use catalog::{Catalog, CatalogEntry};
pub use record::{ContentKind, ContentRecord, KeyError, RecordKey};
