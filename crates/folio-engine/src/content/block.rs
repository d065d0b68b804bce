use serde::Serialize;
use serde_json::{Map, Value};

/// Heading level used when a stored heading has no usable `level`.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Whether a list renders with numbers or bullets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

/// One typed unit of content.
///
/// The set of kinds is closed. Anything else found in stored content is
/// skipped by [`Block::from_value`] so that readers built today keep working
/// when newer kinds show up in the data.
///
/// Serializes to the wire shape `{ "type": "...", ...fields }` with `type`
/// first and the fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph {
        text: String,
    },
    Heading {
        text: String,
        level: u8,
    },
    List {
        style: ListStyle,
        items: Vec<String>,
    },
    Quote {
        text: String,
    },
    Image {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
}

/// Why a stored block value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidBlock {
    #[error("block is not a JSON object")]
    NotAnObject,
    #[error("block has no string `type` field")]
    MissingType,
    #[error("unknown block type `{0}`")]
    UnknownType(String),
    #[error("{kind} block is missing string field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
    #[error("list block has no items")]
    EmptyItems,
    #[error("list item {index} is not a string")]
    InvalidItem { index: usize },
    #[error("image block has an empty url")]
    EmptyUrl,
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn list<I, S>(style: ListStyle, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::List {
            style,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn quote(text: impl Into<String>) -> Self {
        Block::Quote { text: text.into() }
    }

    pub fn image(url: impl Into<String>, caption: Option<String>) -> Self {
        Block::Image {
            url: url.into(),
            caption,
        }
    }

    /// The wire name of this block's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::List { .. } => "list",
            Block::Quote { .. } => "quote",
            Block::Image { .. } => "image",
        }
    }

    /// Checks the field invariants of a block constructed in code.
    ///
    /// Blocks produced by [`Block::from_value`] always pass.
    pub fn is_valid(&self) -> bool {
        match self {
            Block::Paragraph { .. } | Block::Quote { .. } => true,
            Block::Heading { level, .. } => (1..=6).contains(level),
            Block::List { items, .. } => !items.is_empty(),
            Block::Image { url, .. } => !url.is_empty(),
        }
    }

    /// Narrows an untyped stored value to a block, dispatching on `type`.
    pub fn from_value(value: &Value) -> Result<Block, InvalidBlock> {
        let fields = value.as_object().ok_or(InvalidBlock::NotAnObject)?;
        let kind = fields
            .get("type")
            .and_then(Value::as_str)
            .ok_or(InvalidBlock::MissingType)?;

        match kind {
            "paragraph" => narrow_paragraph(fields),
            "heading" => narrow_heading(fields),
            "list" => narrow_list(fields),
            "quote" => narrow_quote(fields),
            "image" => narrow_image(fields),
            other => Err(InvalidBlock::UnknownType(other.to_string())),
        }
    }
}

/// True when `value` narrows to one of the known block kinds.
pub fn is_valid_block(value: &Value) -> bool {
    Block::from_value(value).is_ok()
}

fn string_field(
    fields: &Map<String, Value>,
    kind: &'static str,
    field: &'static str,
) -> Result<String, InvalidBlock> {
    fields
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(InvalidBlock::MissingField { kind, field })
}

pub fn narrow_paragraph(fields: &Map<String, Value>) -> Result<Block, InvalidBlock> {
    Ok(Block::Paragraph {
        text: string_field(fields, "paragraph", "text")?,
    })
}

pub fn narrow_heading(fields: &Map<String, Value>) -> Result<Block, InvalidBlock> {
    let text = string_field(fields, "heading", "text")?;
    let level = fields
        .get("level")
        .and_then(Value::as_u64)
        .filter(|level| (1..=6).contains(level))
        .map_or(DEFAULT_HEADING_LEVEL, |level| level as u8);

    Ok(Block::Heading { text, level })
}

pub fn narrow_list(fields: &Map<String, Value>) -> Result<Block, InvalidBlock> {
    let raw_items = fields
        .get("items")
        .and_then(Value::as_array)
        .ok_or(InvalidBlock::MissingField {
            kind: "list",
            field: "items",
        })?;
    if raw_items.is_empty() {
        return Err(InvalidBlock::EmptyItems);
    }

    let items = raw_items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or(InvalidBlock::InvalidItem { index })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let style = match fields.get("style").and_then(Value::as_str) {
        Some("ordered") => ListStyle::Ordered,
        _ => ListStyle::Unordered,
    };

    Ok(Block::List { style, items })
}

pub fn narrow_quote(fields: &Map<String, Value>) -> Result<Block, InvalidBlock> {
    Ok(Block::Quote {
        text: string_field(fields, "quote", "text")?,
    })
}

pub fn narrow_image(fields: &Map<String, Value>) -> Result<Block, InvalidBlock> {
    let url = string_field(fields, "image", "url")?;
    if url.is_empty() {
        return Err(InvalidBlock::EmptyUrl);
    }
    let caption = fields
        .get("caption")
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Block::Image { url, caption })
}
