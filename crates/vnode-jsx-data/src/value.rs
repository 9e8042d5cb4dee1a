//! Property values carried through the reshaping pipeline.

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// A flat, insertion-ordered JSX property bag.
pub type PropertyBag = IndexMap<String, PropValue>;

/// Key used when an expression is serialized.
pub const EXPRESSION_KEY: &str = "$expr";

/// A property value.
///
/// The pipeline never inspects values beyond reading a `type` string, so
/// anything the host can represent fits in here.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<PropValue>),
    Object(IndexMap<String, PropValue>),
    /// Opaque host expression such as an event handler: onClick={handle}
    Expression(String),
}

impl PropValue {
    /// Create an expression value from its source text.
    pub fn expression(source: impl Into<String>) -> Self {
        Self::Expression(source.into())
    }

    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as object if it's an object value.
    pub fn as_object(&self) -> Option<&IndexMap<String, PropValue>> {
        match self {
            PropValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get as list if it's a list value.
    pub fn as_list(&self) -> Option<&[PropValue]> {
        match self {
            PropValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for PropValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => PropValue::Null,
            serde_json::Value::Bool(b) => PropValue::Bool(b),
            serde_json::Value::Number(n) => PropValue::Number(n),
            serde_json::Value::String(s) => PropValue::String(s),
            serde_json::Value::Array(items) => {
                PropValue::List(items.into_iter().map(PropValue::from).collect())
            }
            serde_json::Value::Object(map) => PropValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, PropValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::String(s)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<i32> for PropValue {
    fn from(n: i32) -> Self {
        PropValue::Number(n.into())
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PropValue::Null => serializer.serialize_unit(),
            PropValue::Bool(b) => serializer.serialize_bool(*b),
            PropValue::Number(n) => n.serialize(serializer),
            PropValue::String(s) => serializer.serialize_str(s),
            PropValue::List(items) => items.serialize(serializer),
            PropValue::Object(map) => map.serialize(serializer),
            PropValue::Expression(source) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(EXPRESSION_KEY, source)?;
                map.end()
            }
        }
    }
}

/// Build a [`PropertyBag`] from key/value pairs, keeping their order.
pub fn bag<K, V, I>(pairs: I) -> PropertyBag
where
    K: Into<String>,
    V: Into<PropValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
