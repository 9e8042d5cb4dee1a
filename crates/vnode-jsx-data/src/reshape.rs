//! Bucket reshaping.
//!
//! Each bucket of classified keys is written into the node data by its own
//! transform. Buckets are disjoint by key, so the transforms can run in any
//! order; they run in bucket order to keep output field order stable.

use crate::classify::{classify_keys, nestable_prefix, DIRECTIVE_PREFIX, XLINK_PREFIX};
use crate::dom_props::apply_dom_props_overrides;
use crate::node::{Directive, NodeData};
use crate::tag::Tag;
use crate::value::{PropValue, PropertyBag};

const PASSIVE_SUFFIX: &str = "-passive";
const PASSIVE_CAMEL_SUFFIX: &str = "Passive";
const PASSIVE_MARKER: char = '&';

/// Reshape a flat property bag into node data for `tag`.
pub fn to_node_data(tag: &Tag, props: PropertyBag) -> NodeData {
    let props = apply_dom_props_overrides(tag, props);
    let keys = classify_keys(&props);

    let mut output = NodeData::new();
    process_top_level(&props, &keys.top, &mut output);
    process_nestable(&props, &keys.nestable, &mut output);
    process_directives(&props, &keys.directive, &mut output);
    process_xlinks(&props, &keys.xlink, &mut output);
    process_attributes(&props, &keys.attribute, &mut output);

    tracing::debug!(
        tag = tag.name(),
        keys = keys.len(),
        fields = output.len(),
        "reshaped node data"
    );
    output
}

/// Copy reserved keys to the top level unchanged.
pub fn process_top_level(props: &PropertyBag, keys: &[&str], output: &mut NodeData) {
    for &key in keys {
        if let Some(value) = props.get(key) {
            output.set(key, value.clone());
        }
    }
}

/// Write `<prefix>Name` keys into their namespace.
pub fn process_nestable(props: &PropertyBag, keys: &[&str], output: &mut NodeData) {
    for &raw_key in keys {
        let Some(value) = props.get(raw_key) else {
            continue;
        };
        let Some((namespace, key)) = parse_nestable_key(raw_key) else {
            continue;
        };
        insert_nested(output, namespace, key, value.clone(), raw_key);
    }
}

/// Append `v-name` keys as directives in source order.
pub fn process_directives(props: &PropertyBag, keys: &[&str], output: &mut NodeData) {
    for &key in keys {
        let Some(value) = props.get(key) else {
            continue;
        };
        let name = key.strip_prefix(DIRECTIVE_PREFIX).unwrap_or(key);
        if output
            .push_directive(Directive::new(name, value.clone()))
            .is_err()
        {
            tracing::warn!(key, "`directives` is not a list; directive not merged");
        }
    }
}

/// Write `xlinkName` keys as `xlink:name` attributes.
pub fn process_xlinks(props: &PropertyBag, keys: &[&str], output: &mut NodeData) {
    for &key in keys {
        let Some(value) = props.get(key) else {
            continue;
        };
        let attr = key.strip_prefix(XLINK_PREFIX).unwrap_or(key).to_lowercase();
        insert_nested(output, "attrs", format!("xlink:{attr}"), value.clone(), key);
    }
}

/// Write everything else into `attrs` unchanged.
pub fn process_attributes(props: &PropertyBag, keys: &[&str], output: &mut NodeData) {
    for &key in keys {
        if let Some(value) = props.get(key) {
            insert_nested(output, "attrs", key.to_string(), value.clone(), key);
        }
    }
}

/// Insert into a namespace. A passthrough value under that name that is not
/// an object is kept as-is and `raw_key` is not merged.
fn insert_nested(
    output: &mut NodeData,
    namespace: &str,
    key: String,
    value: PropValue,
    raw_key: &str,
) {
    match output.namespace_mut(namespace) {
        Some(map) => {
            map.insert(key, value);
        }
        None => tracing::warn!(
            namespace,
            key = raw_key,
            "namespace is not an object; key not merged"
        ),
    }
}

/// Split a nestable key into its namespace and sub-key.
///
/// `on-kebab-case` gives `("on", "kebab-case")`, `onCamelCase` gives
/// `("on", "camelCase")`. Passive listeners get the `&` marker:
/// `on-scroll-passive` and `onScrollPassive` both give `("on", "&scroll")`.
pub fn parse_nestable_key(key: &str) -> Option<(&'static str, String)> {
    let prefix = nestable_prefix(key)?;
    let rest = &key[prefix.len()..];

    let mut chars = rest.chars();
    let first = chars.next()?;
    let separated = first == '-' || first == '_';
    let mut suffix = if separated {
        chars.as_str().to_string()
    } else {
        first.to_lowercase().chain(chars).collect()
    };

    if prefix == "on" {
        let event = suffix.strip_suffix(PASSIVE_SUFFIX).or_else(|| {
            suffix
                .strip_suffix(PASSIVE_CAMEL_SUFFIX)
                .filter(|event| !separated && !event.is_empty())
        });
        if let Some(event) = event {
            suffix = format!("{PASSIVE_MARKER}{event}");
        }
    }

    Some((prefix, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::bag;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn map<const N: usize>(pairs: [(&str, PropValue); N]) -> IndexMap<String, PropValue> {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn extracts_attrs() {
        let data = to_node_data(&Tag::from("div"), bag([("id", "hi"), ("dir", "ltr")]));

        assert_eq!(
            data.attrs().unwrap(),
            &map([("id", "hi".into()), ("dir", "ltr".into())])
        );
        assert_eq!(data.keys().collect::<Vec<_>>(), vec!["attrs"]);
    }

    #[test]
    fn supports_data_attributes() {
        let data = to_node_data(&Tag::from("div"), bag([("data-id", "1")]));

        assert_eq!(data.attrs().unwrap()["data-id"], PropValue::from("1"));
    }

    #[test]
    fn handles_top_level_special_attrs() {
        let props = bag([
            ("class", PropValue::from("foo")),
            ("style", PropValue::from("bar")),
            ("key", PropValue::from("key")),
            ("ref", PropValue::from("ref")),
            ("refInFor", PropValue::from(true)),
            ("slot", PropValue::from("slot")),
        ]);

        let data = to_node_data(&Tag::from("div"), props);

        assert_eq!(data.get("class"), Some(&PropValue::from("foo")));
        assert_eq!(data.get("style"), Some(&PropValue::from("bar")));
        assert_eq!(data.get("key"), Some(&PropValue::from("key")));
        assert_eq!(data.get("ref"), Some(&PropValue::from("ref")));
        assert_eq!(data.get("refInFor"), Some(&PropValue::from(true)));
        assert_eq!(data.get("slot"), Some(&PropValue::from("slot")));
        assert!(data.attrs().is_none());
    }

    #[test]
    fn handles_nested_properties() {
        let props = bag([
            ("on-click", PropValue::expression("fn1")),
            ("on-kebab-case", PropValue::expression("fn2")),
            ("domProps-innerHTML", PropValue::from("<p>hi</p>")),
            ("hook-insert", PropValue::expression("fn3")),
        ]);

        let data = to_node_data(&Tag::from("div"), props);

        assert_eq!(
            data.on().unwrap(),
            &map([
                ("click", PropValue::expression("fn1")),
                ("kebab-case", PropValue::expression("fn2")),
            ])
        );
        assert_eq!(
            data.dom_props().unwrap(),
            &map([("innerHTML", "<p>hi</p>".into())])
        );
        assert_eq!(
            data.hook().unwrap(),
            &map([("insert", PropValue::expression("fn3"))])
        );
        assert!(data.attrs().is_none());
    }

    #[test]
    fn handles_nested_properties_camel_case() {
        let props = bag([
            ("onClick", PropValue::expression("fn1")),
            ("onCamelCase", PropValue::expression("fn2")),
            ("domPropsInnerHTML", PropValue::from("<p>hi</p>")),
            ("hookInsert", PropValue::expression("fn3")),
            ("nativeOnFocus", PropValue::expression("fn4")),
        ]);

        let data = to_node_data(&Tag::from("div"), props);

        let on = data.on().unwrap();
        assert_eq!(on["click"], PropValue::expression("fn1"));
        assert_eq!(on["camelCase"], PropValue::expression("fn2"));
        assert_eq!(
            data.dom_props().unwrap()["innerHTML"],
            PropValue::from("<p>hi</p>")
        );
        assert_eq!(data.hook().unwrap()["insert"], PropValue::expression("fn3"));
        assert_eq!(
            data.native_on().unwrap()["focus"],
            PropValue::expression("fn4")
        );
    }

    #[test]
    fn parses_nestable_keys() {
        assert_eq!(parse_nestable_key("on-click"), Some(("on", "click".to_string())));
        assert_eq!(parse_nestable_key("on_click"), Some(("on", "click".to_string())));
        assert_eq!(parse_nestable_key("onClick"), Some(("on", "click".to_string())));
        assert_eq!(
            parse_nestable_key("nativeOn-Custom"),
            Some(("nativeOn", "Custom".to_string()))
        );
        assert_eq!(parse_nestable_key("online"), None);
        assert_eq!(parse_nestable_key("title"), None);
    }

    #[test]
    fn marks_passive_listeners() {
        assert_eq!(
            parse_nestable_key("on-scroll-passive"),
            Some(("on", "&scroll".to_string()))
        );
        assert_eq!(
            parse_nestable_key("onScrollPassive"),
            Some(("on", "&scroll".to_string()))
        );
        assert_eq!(
            parse_nestable_key("on-touch-start-passive"),
            Some(("on", "&touch-start".to_string()))
        );
        // only listeners can be passive
        assert_eq!(
            parse_nestable_key("hook-insert-passive"),
            Some(("hook", "insert-passive".to_string()))
        );
        assert_eq!(parse_nestable_key("onPassive"), Some(("on", "passive".to_string())));
    }

    #[test]
    fn custom_directives_keep_order() {
        let props = bag([("v-test", 123), ("v-other", 234)]);
        let data = to_node_data(&Tag::from("div"), props);

        assert_eq!(
            data.directives(),
            vec![
                Directive::new("test", PropValue::from(123)),
                Directive::new("other", PropValue::from(234)),
            ]
        );
        assert!(data.attrs().is_none());
    }

    #[test]
    fn directive_names_are_verbatim() {
        let data = to_node_data(&Tag::from("div"), bag([("v-Click-Outside", true)]));

        assert_eq!(data.directives()[0].name, "Click-Outside");
    }

    #[test]
    fn rewrites_xlink_attributes() {
        let data = to_node_data(&Tag::from("use"), bag([("xlinkHref", "#name")]));

        assert_eq!(data.attrs().unwrap()["xlink:href"], PropValue::from("#name"));
    }

    #[test]
    fn malformed_xlink_is_plain_attribute() {
        let data = to_node_data(&Tag::from("use"), bag([("xlink", "a"), ("xlinkhref", "b")]));

        let attrs = data.attrs().unwrap();
        assert_eq!(attrs["xlink"], PropValue::from("a"));
        assert_eq!(attrs["xlinkhref"], PropValue::from("b"));
    }

    #[test]
    fn routes_dom_props_overrides() {
        let data = to_node_data(&Tag::from("input"), bag([("value", "some jsx expression")]));
        assert_eq!(
            data.dom_props().unwrap()["value"],
            PropValue::from("some jsx expression")
        );
        assert!(data.attrs().is_none());

        let data = to_node_data(&Tag::from("input"), bag([("type", "button"), ("value", "value")]));
        assert_eq!(data.attrs().unwrap()["value"], PropValue::from("value"));
        assert!(data.dom_props().is_none());

        let data = to_node_data(&Tag::from("option"), bag([("selected", true)]));
        assert_eq!(data.dom_props().unwrap()["selected"], PropValue::from(true));

        let data = to_node_data(&Tag::from("video"), bag([("muted", true)]));
        assert_eq!(data.dom_props().unwrap()["muted"], PropValue::from(true));

        let data = to_node_data(&Tag::from("input"), bag([("checked", true)]));
        assert_eq!(data.dom_props().unwrap()["checked"], PropValue::from(true));
    }

    #[test]
    fn nested_keys_merge_into_passthrough_namespace() {
        let mut on = IndexMap::new();
        on.insert("focus".to_string(), PropValue::expression("a"));
        let props = bag([
            ("on", PropValue::Object(on)),
            ("onClick", PropValue::expression("b")),
        ]);

        let data = to_node_data(&Tag::from("div"), props);

        assert_eq!(
            data.on().unwrap(),
            &map([
                ("focus", PropValue::expression("a")),
                ("click", PropValue::expression("b")),
            ])
        );
    }

    #[test]
    fn opaque_passthrough_values_are_kept() {
        let props = bag([
            ("attrs", PropValue::expression("extra")),
            ("id", PropValue::from("x")),
            ("on", PropValue::expression("handlers")),
            ("onClick", PropValue::expression("f")),
            ("directives", PropValue::expression("dirs")),
            ("v-focus", PropValue::from(true)),
        ]);

        let data = to_node_data(&Tag::from("div"), props);

        assert_eq!(data.get("attrs"), Some(&PropValue::expression("extra")));
        assert_eq!(data.get("on"), Some(&PropValue::expression("handlers")));
        assert_eq!(data.get("directives"), Some(&PropValue::expression("dirs")));
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn spread_props_object_passes_through() {
        let props = bag([(
            "props",
            PropValue::from(serde_json::json!({"innerHTML": 2})),
        )]);

        let data = to_node_data(&Tag::from("div"), props);

        let inner = data.get("props").and_then(PropValue::as_object).unwrap();
        assert_eq!(inner["innerHTML"], PropValue::from(2));
    }

    #[test]
    fn empty_bag_gives_empty_data() {
        let data = to_node_data(&Tag::from("div"), PropertyBag::new());
        assert!(data.is_empty());
    }
}
