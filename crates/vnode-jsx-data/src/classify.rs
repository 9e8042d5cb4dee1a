//! Key classification.
//!
//! Partitions the keys of a property bag into five buckets. Rules are tried
//! in order and the first match wins, so a key always lands in exactly one
//! bucket.

use serde::Serialize;

use crate::value::PropertyBag;

/// Keys passed through to the top level of the node data unchanged.
pub const TOPLEVEL_KEYS: &[&str] = &[
    "attrs",
    "class",
    "directives",
    "domProps",
    "hook",
    "keepAlive",
    "key",
    "nativeOn",
    "on",
    "props",
    "ref",
    "refInFor",
    "scopedSlot",
    "show",
    "slot",
    "staticClass",
    "staticStyle",
    "style",
    "transition",
    // router integration
    "registerRouteInstance",
    "routerView",
    "routerViewDepth",
];

/// Namespaces that `<prefix>-name` / `<prefix>Name` keys are nested under.
pub const NESTABLE_PREFIXES: &[&str] = &["domProps", "on", "nativeOn", "hook"];

pub const DIRECTIVE_PREFIX: &str = "v-";
pub const XLINK_PREFIX: &str = "xlink";

/// Destination bucket of a property key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Top,
    Nestable,
    Directive,
    Xlink,
    Attribute,
}

/// Ordered predicate table. `Attribute` is the fallback and has no rule.
const RULES: &[(Bucket, fn(&str) -> bool)] = &[
    (Bucket::Top, is_top),
    (Bucket::Nestable, is_nestable),
    (Bucket::Directive, is_directive),
    (Bucket::Xlink, is_xlink),
];

/// Keys of a property bag partitioned by bucket, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedKeys<'a> {
    pub top: Vec<&'a str>,
    pub nestable: Vec<&'a str>,
    pub directive: Vec<&'a str>,
    pub xlink: Vec<&'a str>,
    pub attribute: Vec<&'a str>,
}

impl<'a> ClassifiedKeys<'a> {
    /// Keys routed into a bucket.
    pub fn bucket(&self, bucket: Bucket) -> &[&'a str] {
        match bucket {
            Bucket::Top => &self.top,
            Bucket::Nestable => &self.nestable,
            Bucket::Directive => &self.directive,
            Bucket::Xlink => &self.xlink,
            Bucket::Attribute => &self.attribute,
        }
    }

    fn push(&mut self, bucket: Bucket, key: &'a str) {
        match bucket {
            Bucket::Top => self.top.push(key),
            Bucket::Nestable => self.nestable.push(key),
            Bucket::Directive => self.directive.push(key),
            Bucket::Xlink => self.xlink.push(key),
            Bucket::Attribute => self.attribute.push(key),
        }
    }

    /// Total number of classified keys.
    pub fn len(&self) -> usize {
        self.top.len()
            + self.nestable.len()
            + self.directive.len()
            + self.xlink.len()
            + self.attribute.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify every key of a property bag.
pub fn classify_keys(props: &PropertyBag) -> ClassifiedKeys<'_> {
    let mut keys = ClassifiedKeys::default();
    for key in props.keys() {
        let bucket = classify_key(key);
        tracing::trace!(key = key.as_str(), ?bucket, "classified");
        keys.push(bucket, key);
    }
    keys
}

/// Find the bucket for a single key.
pub fn classify_key(key: &str) -> Bucket {
    RULES
        .iter()
        .find(|(_, matches)| matches(key))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(Bucket::Attribute)
}

/// The namespace prefix of a nestable key, if any.
///
/// The prefix must end on a word boundary: `on-click` and `onClick` match
/// `on`, `online` does not.
pub fn nestable_prefix(key: &str) -> Option<&'static str> {
    NESTABLE_PREFIXES.iter().copied().find(|prefix| {
        key.strip_prefix(prefix)
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c == '-' || c == '_' || c.is_uppercase())
    })
}

fn is_top(key: &str) -> bool {
    TOPLEVEL_KEYS.contains(&key)
}

fn is_nestable(key: &str) -> bool {
    nestable_prefix(key).is_some()
}

fn is_directive(key: &str) -> bool {
    key.starts_with(DIRECTIVE_PREFIX)
}

fn is_xlink(key: &str) -> bool {
    key.strip_prefix(XLINK_PREFIX)
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{bag, PropValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn reserved_names_are_top_level() {
        for key in TOPLEVEL_KEYS {
            assert_eq!(classify_key(key), Bucket::Top, "{key}");
        }
    }

    #[test]
    fn nestable_requires_word_boundary() {
        assert_eq!(classify_key("on-click"), Bucket::Nestable);
        assert_eq!(classify_key("on_click"), Bucket::Nestable);
        assert_eq!(classify_key("onClick"), Bucket::Nestable);
        assert_eq!(classify_key("nativeOnClick"), Bucket::Nestable);
        assert_eq!(classify_key("domProps-innerHTML"), Bucket::Nestable);
        assert_eq!(classify_key("hookInsert"), Bucket::Nestable);

        assert_eq!(classify_key("online"), Bucket::Attribute);
        assert_eq!(classify_key("hooked"), Bucket::Attribute);
        assert_eq!(classify_key("one"), Bucket::Attribute);
    }

    #[test]
    fn top_level_wins_over_prefix_rules() {
        // "on" and "domProps" are both reserved names and nestable prefixes
        assert_eq!(classify_key("on"), Bucket::Top);
        assert_eq!(classify_key("domProps"), Bucket::Top);
    }

    #[test]
    fn classifies_directives_and_xlinks() {
        assert_eq!(classify_key("v-test"), Bucket::Directive);
        assert_eq!(classify_key("v-"), Bucket::Directive);
        assert_eq!(classify_key("xlinkHref"), Bucket::Xlink);

        assert_eq!(classify_key("xlink"), Bucket::Attribute);
        assert_eq!(classify_key("xlinkhref"), Bucket::Attribute);
        assert_eq!(classify_key("vtest"), Bucket::Attribute);
    }

    #[test]
    fn partitions_every_key_in_order() {
        let props = bag([
            ("id", PropValue::from("hi")),
            ("onClick", PropValue::expression("a")),
            ("class", PropValue::from("foo")),
            ("v-show", PropValue::from(true)),
            ("data-id", PropValue::from("1")),
            ("xlinkHref", PropValue::from("#x")),
            ("on-input", PropValue::expression("b")),
        ]);

        let keys = classify_keys(&props);

        assert_eq!(keys.top, vec!["class"]);
        assert_eq!(keys.nestable, vec!["onClick", "on-input"]);
        assert_eq!(keys.directive, vec!["v-show"]);
        assert_eq!(keys.xlink, vec!["xlinkHref"]);
        assert_eq!(keys.attribute, vec!["id", "data-id"]);
        assert_eq!(keys.bucket(Bucket::Nestable), &["onClick", "on-input"]);
        assert_eq!(keys.len(), props.len());
    }

    #[test]
    fn empty_bag_has_no_keys() {
        let empty = PropertyBag::new();
        let keys = classify_keys(&empty);
        assert!(keys.is_empty());
        assert!(keys.bucket(Bucket::Attribute).is_empty());
    }
}
