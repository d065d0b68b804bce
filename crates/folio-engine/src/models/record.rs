use std::fmt;
use std::str::FromStr;

use relative_path::{RelativePath, RelativePathBuf};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content::RawContent;

/// The kinds of record that own a content document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Book,
    BusinessPlan,
    BlogPost,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [
        ContentKind::Book,
        ContentKind::BusinessPlan,
        ContentKind::BlogPost,
    ];

    /// Directory holding records of this kind inside a store root.
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentKind::Book => "books",
            ContentKind::BusinessPlan => "plans",
            ContentKind::BlogPost => "posts",
        }
    }

    pub fn from_dir_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.dir_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            ContentKind::Book => "Book",
            ContentKind::BusinessPlan => "Business plan",
            ContentKind::BlogPost => "Blog post",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("expected <kind>/<slug>, got `{0}`")]
    Malformed(String),
    #[error("unknown content kind `{0}` (expected books, plans or posts)")]
    UnknownKind(String),
    #[error("invalid slug `{0}`")]
    InvalidSlug(String),
}

/// Identifies a record in a store: its kind plus a slug unique within the kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub kind: ContentKind,
    slug: String,
}

impl RecordKey {
    pub fn new(kind: ContentKind, slug: impl Into<String>) -> Result<Self, KeyError> {
        let slug = slug.into();
        if !is_valid_slug(&slug) {
            return Err(KeyError::InvalidSlug(slug));
        }
        Ok(Self { kind, slug })
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Location of the record file relative to a store root, e.g. `posts/hello.json`.
    pub fn relative_path(&self) -> RelativePathBuf {
        RelativePathBuf::from(self.kind.dir_name()).join(format!("{}.json", self.slug))
    }

    /// Inverse of [`RecordKey::relative_path`]; `None` for anything that is not a record file.
    pub fn from_relative_path(path: &RelativePath) -> Option<Self> {
        let mut components = path.components();
        let kind = ContentKind::from_dir_name(components.next()?.as_str())?;
        let file_name = components.next()?.as_str();
        if components.next().is_some() {
            return None;
        }
        let slug = file_name.strip_suffix(".json")?;
        Self::new(kind, slug).ok()
    }
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('.')
        && slug
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind.dir_name(), self.slug)
    }
}

impl FromStr for RecordKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, slug) = s
            .split_once('/')
            .ok_or_else(|| KeyError::Malformed(s.to_string()))?;
        let kind = ContentKind::from_dir_name(kind)
            .ok_or_else(|| KeyError::UnknownKind(kind.to_string()))?;
        Self::new(kind, slug)
    }
}

/// A book, business plan or blog post together with its stored content.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    pub id: Uuid,
    pub key: RecordKey,
    pub title: String,
    pub content: RawContent,
}

impl ContentRecord {
    /// Creates a record with a fresh id.
    pub fn new(key: RecordKey, title: impl Into<String>, content: RawContent) -> Self {
        Self {
            id: Uuid::new_v4(),
            key,
            title: title.into(),
            content,
        }
    }

    /// Title for listings, falling back to the slug.
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            self.key.slug()
        } else {
            &self.title
        }
    }
}
