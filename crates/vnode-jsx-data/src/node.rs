//! Structured virtual node data.

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::PropValue;

/// A custom directive attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directive {
    pub name: String,
    pub value: PropValue,
}

impl Directive {
    pub fn new(name: impl Into<String>, value: PropValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Read a directive back from its object form.
    pub fn from_value(value: &PropValue) -> Option<Self> {
        let object = value.as_object()?;
        let name = object.get("name")?.as_str()?;
        Some(Self::new(
            name,
            object.get("value").cloned().unwrap_or_default(),
        ))
    }

    fn into_value(self) -> PropValue {
        let mut object = IndexMap::with_capacity(2);
        object.insert("name".to_string(), PropValue::String(self.name));
        object.insert("value".to_string(), self.value);
        PropValue::Object(object)
    }
}

/// Node data in the shape the host framework expects.
///
/// Top-level passthrough fields (`class`, `style`, `key`, ...) sit next to
/// the lazily created `attrs`, `directives` and namespace mappings (`on`,
/// `nativeOn`, `domProps`, `hook`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NodeData {
    fields: IndexMap<String, PropValue>,
}

impl NodeData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap fields that are already in node data shape.
    pub fn from_fields(fields: IndexMap<String, PropValue>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Top-level field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Set a top-level field, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: PropValue) {
        self.fields.insert(key.into(), value);
    }

    /// A namespace mapping such as `on` or `domProps`.
    pub fn namespace(&self, name: &str) -> Option<&IndexMap<String, PropValue>> {
        self.fields.get(name).and_then(PropValue::as_object)
    }

    pub fn attrs(&self) -> Option<&IndexMap<String, PropValue>> {
        self.namespace("attrs")
    }

    pub fn on(&self) -> Option<&IndexMap<String, PropValue>> {
        self.namespace("on")
    }

    pub fn native_on(&self) -> Option<&IndexMap<String, PropValue>> {
        self.namespace("nativeOn")
    }

    pub fn dom_props(&self) -> Option<&IndexMap<String, PropValue>> {
        self.namespace("domProps")
    }

    pub fn hook(&self) -> Option<&IndexMap<String, PropValue>> {
        self.namespace("hook")
    }

    /// Directives in declaration order. Entries not shaped like
    /// `{name, value}` are skipped.
    pub fn directives(&self) -> Vec<Directive> {
        self.fields
            .get("directives")
            .and_then(PropValue::as_list)
            .map(|items| items.iter().filter_map(Directive::from_value).collect())
            .unwrap_or_default()
    }

    /// Get the namespace mapping `name`, creating it on first use.
    ///
    /// Returns `None` when a non-object value is already stored under
    /// `name`; that value is left untouched.
    pub fn namespace_mut(&mut self, name: &str) -> Option<&mut IndexMap<String, PropValue>> {
        let slot = self
            .fields
            .entry(name.to_string())
            .or_insert_with(|| PropValue::Object(IndexMap::new()));
        match slot {
            PropValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Append a directive, creating the `directives` list on first use.
    ///
    /// When a non-list value is already stored under `directives` it is left
    /// untouched and the directive is handed back.
    pub fn push_directive(&mut self, directive: Directive) -> Result<(), Directive> {
        let slot = self
            .fields
            .entry("directives".to_string())
            .or_insert_with(|| PropValue::List(Vec::new()));
        match slot {
            PropValue::List(items) => {
                items.push(directive.into_value());
                Ok(())
            }
            _ => Err(directive),
        }
    }
}
