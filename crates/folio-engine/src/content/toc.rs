use serde::Serialize;

use super::{anchor::AnchorId, block::Block, document::Document};

/// One outline entry linking to a heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub text: String,
    pub anchor_id: AnchorId,
    pub level: u8,
}

/// Collects the headings of a document as a navigable outline.
///
/// Anchors use the same positional numbering as [`super::render::render`], and
/// headings the renderer would skip are skipped here too.
pub fn extract_toc(doc: &Document) -> Vec<TocEntry> {
    doc.blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.is_valid())
        .filter_map(|(position, block)| match block {
            Block::Heading { text, level } => Some(TocEntry {
                text: text.clone(),
                anchor_id: AnchorId::for_position(position),
                level: *level,
            }),
            _ => None,
        })
        .collect()
}
