//! Edit-time bridge between what an operator types and what gets stored.
//!
//! Loading pretty-prints structured content for a text box and leaves legacy
//! prose alone. Saving always produces a document envelope; a syntax slip in
//! hand-edited JSON turns the input into paragraphs instead of blocking the
//! save.

use serde_json::{Value, json};

use super::{
    block::Block,
    codec::{decode, document_blocks, encode, split_paragraphs},
    document::Document,
    raw::RawContent,
};

/// How a saved document is handed to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageFormat {
    /// As a parsed JSON object.
    #[default]
    Object,
    /// As a pretty-printed JSON string.
    String,
}

/// Text to show in the editor for stored content.
pub fn prepare_for_edit(raw: &RawContent) -> String {
    match raw {
        RawContent::Empty | RawContent::Structured(Value::Null) => String::new(),
        RawContent::Text(text) | RawContent::Structured(Value::String(text)) => {
            match parse_envelope(text) {
                Some(_) => encode(&decode(raw)),
                None => text.clone(),
            }
        }
        RawContent::Structured(value) if document_blocks(value).is_some() => encode(&decode(raw)),
        RawContent::Structured(value) => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// Normalizes editor input into a document envelope stored as an object.
pub fn prepare_for_save(input: &str) -> RawContent {
    prepare_for_save_as(input, StorageFormat::Object)
}

/// Normalizes editor input into a document envelope in the given format.
///
/// Input that parses to an envelope is kept as written; blocks that fail
/// validation stay in storage and are dropped when read. Anything else is
/// split on blank lines into paragraphs.
pub fn prepare_for_save_as(input: &str, format: StorageFormat) -> RawContent {
    let value = parse_envelope(input).unwrap_or_else(|| {
        if input.trim_start().starts_with('{') {
            log::debug!("editor input is not a valid document, saving it as paragraphs");
        }
        let doc: Document = split_paragraphs(input)
            .into_iter()
            .map(Block::paragraph)
            .collect();
        json!(doc)
    });

    match format {
        StorageFormat::Object => RawContent::Structured(value),
        StorageFormat::String => {
            RawContent::Text(serde_json::to_string_pretty(&value).unwrap_or_default())
        }
    }
}

/// Parses `text` when it is a JSON object holding a `blocks` array.
fn parse_envelope(text: &str) -> Option<Value> {
    if !text.trim_start().starts_with('{') {
        return None;
    }
    let value: Value = serde_json::from_str(text).ok()?;
    document_blocks(&value).is_some().then_some(value)
}
