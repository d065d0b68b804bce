use std::fmt;

use serde::Serialize;

/// Anchor id of a heading, derived from its position in the full block list.
///
/// The renderer and the TOC extractor both build anchors through
/// [`AnchorId::for_position`]; the index counts every block, not just headings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AnchorId(String);

impl AnchorId {
    pub const PREFIX: &'static str = "heading-";

    pub fn for_position(index: usize) -> Self {
        Self(format!("{}{index}", Self::PREFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// In-page link target, e.g. `#heading-3`.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
