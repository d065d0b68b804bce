use serde_json::Value;

/// The untyped value a store holds in a record's `content` field.
///
/// Stores hand back whatever was written: a JSON string, an already parsed
/// object, legacy prose, or nothing at all. [`crate::content::codec::decode`]
/// is the only place that interprets it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawContent {
    /// `null` or absent.
    #[default]
    Empty,
    /// A string: serialized JSON or legacy plain text.
    Text(String),
    /// An already parsed JSON value (normally an object with `blocks`).
    Structured(Value),
}

impl RawContent {
    pub fn is_empty(&self) -> bool {
        match self {
            RawContent::Empty => true,
            RawContent::Text(text) => text.trim().is_empty(),
            RawContent::Structured(value) => value.is_null(),
        }
    }

    /// Converts back into the JSON value a store persists.
    pub fn into_value(self) -> Value {
        match self {
            RawContent::Empty => Value::Null,
            RawContent::Text(text) => Value::String(text),
            RawContent::Structured(value) => value,
        }
    }
}

impl From<Value> for RawContent {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawContent::Empty,
            Value::String(text) => RawContent::Text(text),
            other => RawContent::Structured(other),
        }
    }
}

impl From<Option<Value>> for RawContent {
    fn from(value: Option<Value>) -> Self {
        value.map(RawContent::from).unwrap_or_default()
    }
}

impl From<&str> for RawContent {
    fn from(text: &str) -> Self {
        RawContent::Text(text.to_string())
    }
}

impl From<String> for RawContent {
    fn from(text: String) -> Self {
        RawContent::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_values_map_to_variants() {
        assert_eq!(RawContent::from(Value::Null), RawContent::Empty);
        assert_eq!(RawContent::from(None), RawContent::Empty);
        assert_eq!(
            RawContent::from(json!("hello")),
            RawContent::Text("hello".into())
        );
        assert_eq!(
            RawContent::from(json!({"blocks": []})),
            RawContent::Structured(json!({"blocks": []}))
        );
    }

    #[test]
    fn into_value_round_trips() {
        for value in [Value::Null, json!("text"), json!({"blocks": [1]})] {
            assert_eq!(RawContent::from(value.clone()).into_value(), value);
        }
    }

    #[test]
    fn whitespace_text_counts_as_empty() {
        assert!(RawContent::from(" \n\n ").is_empty());
        assert!(!RawContent::from("x").is_empty());
        assert!(RawContent::Structured(Value::Null).is_empty());
    }
}
