//! Shape classification of JSON values.
//!
//! Every value falls into exactly one [`Shape`]; the tree builder matches on
//! it once, so adding a shape is a compile error until every consumer
//! handles it.

use serde::Serialize;
use serde_json::{Map, Value};

/// Strings longer than this many characters are shown as pre-wrapped blocks.
pub const LONG_TEXT_THRESHOLD: usize = 100;

/// Display form of a scalar (non-container) value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PrimitiveView {
    /// `null`, shown as an explicit empty marker.
    Empty,
    /// A boolean, shown as a two-state badge.
    Flag(bool),
    /// A number in its verbatim JSON text.
    Number(String),
    /// An `http://` or `https://` string.
    Link(String),
    /// A long string; whitespace and newlines are preserved.
    Block(String),
    /// Any other string, shown inline.
    Text(String),
}

impl PrimitiveView {
    /// Returns the view of a scalar, or `None` for arrays and objects.
    pub fn of(value: &Value) -> Option<Self> {
        let view = match value {
            Value::Null => Self::Empty,
            Value::Bool(flag) => Self::Flag(*flag),
            Value::Number(number) => Self::Number(number.to_string()),
            Value::String(text) => classify_text(text),
            Value::Array(_) | Value::Object(_) => return None,
        };
        Some(view)
    }
}

fn classify_text(text: &str) -> PrimitiveView {
    if text.starts_with("http://") || text.starts_with("https://") {
        PrimitiveView::Link(text.to_string())
    } else if text.chars().count() > LONG_TEXT_THRESHOLD {
        PrimitiveView::Block(text.to_string())
    } else {
        PrimitiveView::Text(text.to_string())
    }
}

/// The closed set of display shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    Primitive(PrimitiveView),
    EmptyObject,
    EmptyArray,
    /// Non-empty array whose elements are all scalars (null included).
    ScalarArray(&'a [Value]),
    /// Non-empty array holding at least one array or object.
    MixedArray(&'a [Value]),
    /// Non-empty object.
    Object(&'a Map<String, Value>),
}

/// Returns true for values that are neither arrays nor objects.
pub fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

/// Classifies a value into its display shape.
pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Array(items) if items.is_empty() => Shape::EmptyArray,
        Value::Array(items) if items.iter().all(is_scalar) => Shape::ScalarArray(items),
        Value::Array(items) => Shape::MixedArray(items),
        Value::Object(map) if map.is_empty() => Shape::EmptyObject,
        Value::Object(map) => Shape::Object(map),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            // Scalars always have a view.
            Shape::Primitive(PrimitiveView::of(value).unwrap_or(PrimitiveView::Empty))
        }
    }
}
