/*!
 * # Structured Content Documents
 *
 * Books, business plans and blog posts store their body as a list of typed
 * blocks. This module moves that body between three shapes:
 *
 * - **Raw content**: whatever the store holds (`RawContent`): a JSON string,
 *   a parsed object, legacy prose, or nothing
 * - **Document**: the canonical ordered `Vec<Block>`
 * - **Render nodes** and **TOC entries**: display projections of a document
 *
 * ## Data Flow
 *
 * ```text
 * editor text --prepare_for_save--> RawContent --(store)--> decode --> Document
 *                                                                    |--> render      --> Vec<RenderNode>
 *                                                                    '--> extract_toc --> Vec<TocEntry>
 * ```
 *
 * ## Recovery Instead of Errors
 *
 * Reading never fails. Malformed JSON becomes plain-text paragraphs, invalid
 * blocks are dropped one by one, and empty content is a normal empty
 * document. `decode_with_report` says which of these happened.
 *
 * ## Anchors
 *
 * A heading's anchor is `heading-<index>` where `<index>` is its position in
 * the full block list. `render` and `extract_toc` both go through
 * `AnchorId::for_position`, so TOC links always hit rendered headings.
 *
 * ## Usage
 *
 * ```rust
 * use folio_engine::content::*;
 *
 * let raw = RawContent::from(r#"{"blocks":[{"type":"heading","text":"Intro","level":2}]}"#);
 * let doc = decode(&raw);
 * let nodes = render(&doc);
 * let toc = extract_toc(&doc);
 *
 * assert_eq!(nodes[0].anchor_id(), Some(&toc[0].anchor_id));
 * ```
 */

pub mod anchor;
pub mod authoring;
pub mod block;
pub mod codec;
pub mod document;
pub mod html;
pub mod page;
pub mod raw;
pub mod render;
pub mod toc;

pub use anchor::AnchorId;
pub use authoring::{StorageFormat, prepare_for_edit, prepare_for_save, prepare_for_save_as};
pub use block::{Block, InvalidBlock, ListStyle, is_valid_block};
pub use codec::{
    DecodeReport, DecodeSource, DroppedBlock, FallbackReason, decode, decode_with_report, encode,
    split_paragraphs,
};
pub use document::Document;
pub use html::{render_html, render_placeholder, render_toc_html};
pub use page::Page;
pub use raw::RawContent;
pub use render::{RenderNode, render};
pub use toc::{TocEntry, extract_toc};
