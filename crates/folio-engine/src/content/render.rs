use serde::Serialize;

use super::{
    anchor::AnchorId,
    block::{Block, ListStyle},
    document::Document,
};

/// Display-ready projection of one block.
///
/// Nodes carry normalized fields only and know nothing about styling. A
/// consumer decides how each kind looks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum RenderNode {
    Text {
        text: String,
    },
    Heading {
        level: u8,
        text: String,
        anchor_id: AnchorId,
    },
    List {
        style: ListStyle,
        items: Vec<String>,
    },
    Quote {
        text: String,
    },
    Figure {
        url: String,
        caption: Option<String>,
    },
}

/// Projects a document into render nodes, one per valid block.
///
/// Invalid blocks produce no node but still occupy their position, so heading
/// anchors always equal the block's index in `doc.blocks`. An empty document
/// yields no nodes; showing a placeholder is the caller's business.
pub fn render(doc: &Document) -> Vec<RenderNode> {
    doc.blocks
        .iter()
        .enumerate()
        .filter_map(|(position, block)| render_block(position, block))
        .collect()
}

fn render_block(position: usize, block: &Block) -> Option<RenderNode> {
    if !block.is_valid() {
        log::warn!("skipping invalid {} block at {position}", block.kind());
        return None;
    }

    let node = match block {
        Block::Paragraph { text } => RenderNode::Text { text: text.clone() },
        Block::Heading { text, level } => RenderNode::Heading {
            level: *level,
            text: text.clone(),
            anchor_id: AnchorId::for_position(position),
        },
        Block::List { style, items } => RenderNode::List {
            style: *style,
            items: items.clone(),
        },
        Block::Quote { text } => RenderNode::Quote { text: text.clone() },
        Block::Image { url, caption } => RenderNode::Figure {
            url: url.clone(),
            caption: caption.clone(),
        },
    };
    Some(node)
}

impl RenderNode {
    /// The anchor of a heading node.
    pub fn anchor_id(&self) -> Option<&AnchorId> {
        match self {
            RenderNode::Heading { anchor_id, .. } => Some(anchor_id),
            _ => None,
        }
    }
}
