//! Conversion between stored [`RawContent`] and [`Document`].
//!
//! Decoding is total. Malformed input degrades to the next best
//! representation instead of failing: a document envelope, then plain-text
//! paragraphs, then an empty document. Only strings take the plain-text
//! path; a parsed value that is not an envelope has nothing to show.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use super::{
    block::{Block, InvalidBlock},
    document::Document,
    raw::RawContent,
};

/// Why content was read as plain text rather than as blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The string did not parse as JSON.
    MalformedJson,
    /// The string parsed as JSON but is not an object with a `blocks` array.
    NotADocument,
}

/// Which decoding path produced the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeSource {
    /// Nothing to show.
    Empty,
    /// Read from a `{ "blocks": [...] }` envelope.
    Blocks,
    /// Split into paragraphs from plain text.
    PlainText(FallbackReason),
}

/// A stored block that was skipped during decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedBlock {
    /// Position in the stored `blocks` array.
    pub index: usize,
    pub reason: InvalidBlock,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub document: Document,
    pub source: DecodeSource,
    pub dropped: Vec<DroppedBlock>,
}

impl DecodeReport {
    fn empty() -> Self {
        Self {
            document: Document::default(),
            source: DecodeSource::Empty,
            dropped: Vec::new(),
        }
    }

    fn finish(mut self) -> Self {
        if self.document.is_empty() {
            self.source = DecodeSource::Empty;
        }
        self
    }
}

/// Decodes stored content into a document. Never fails.
pub fn decode(raw: &RawContent) -> Document {
    decode_with_report(raw).document
}

/// Decodes stored content and reports which recovery path was taken.
pub fn decode_with_report(raw: &RawContent) -> DecodeReport {
    let report = match raw {
        RawContent::Empty | RawContent::Structured(Value::Null) => DecodeReport::empty(),
        RawContent::Text(text) | RawContent::Structured(Value::String(text)) => decode_text(text),
        RawContent::Structured(value) => match document_blocks(value) {
            Some(items) => decode_blocks(items),
            None => {
                log::debug!("stored value is not a document envelope, nothing to show");
                DecodeReport::empty()
            }
        },
    };

    report.finish()
}

/// Serializes a document as pretty-printed `{ "blocks": [...] }` JSON.
pub fn encode(doc: &Document) -> String {
    serde_json::to_string_pretty(doc).expect("document serialization cannot fail")
}

/// The `blocks` array of a document envelope, if `value` is one.
pub(crate) fn document_blocks(value: &Value) -> Option<&Vec<Value>> {
    value.as_object()?.get("blocks")?.as_array()
}

/// Splits text on blank lines into trimmed, non-empty segments.
///
/// A blank line is a line holding nothing but spaces or tabs; any run of
/// them forms a single boundary.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    static BLANK_LINES: OnceLock<Regex> = OnceLock::new();
    let blank_lines = BLANK_LINES
        .get_or_init(|| Regex::new(r"\r?\n(?:[ \t]*\r?\n)+").expect("Invalid blank line regex"));

    blank_lines
        .split(text)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn decode_text(text: &str) -> DecodeReport {
    if text.trim().is_empty() {
        return DecodeReport::empty();
    }

    match serde_json::from_str::<Value>(text) {
        Ok(value) => match document_blocks(&value) {
            Some(items) => decode_blocks(items),
            None => decode_plain_text(text, FallbackReason::NotADocument),
        },
        Err(err) => {
            log::debug!("content is not JSON ({err}), reading it as plain text");
            decode_plain_text(text, FallbackReason::MalformedJson)
        }
    }
}

fn decode_blocks(items: &[Value]) -> DecodeReport {
    let mut blocks = Vec::with_capacity(items.len());
    let mut dropped = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match Block::from_value(item) {
            Ok(block) => blocks.push(block),
            Err(reason) => {
                log::warn!("dropping block {index}: {reason}");
                dropped.push(DroppedBlock { index, reason });
            }
        }
    }

    DecodeReport {
        document: Document::new(blocks),
        source: DecodeSource::Blocks,
        dropped,
    }
}

fn decode_plain_text(text: &str, reason: FallbackReason) -> DecodeReport {
    DecodeReport {
        document: split_paragraphs(text)
            .into_iter()
            .map(Block::paragraph)
            .collect(),
        source: DecodeSource::PlainText(reason),
        dropped: Vec::new(),
    }
}
