//! DOM property override policy.
//!
//! Some element state only behaves correctly when set as a live DOM property
//! rather than a markup attribute (a checkbox's `checked`, an input's
//! `value`). Those keys are renamed into the `domProps` namespace before
//! classification.

use crate::tag::Tag;
use crate::value::PropertyBag;

/// Elements whose `value` must be set as a DOM property.
const ACCEPT_VALUE: &[&str] = &["input", "textarea", "option", "select"];

/// Prefix that routes a renamed key into the `domProps` namespace.
pub const DOM_PROPS_RENAME_PREFIX: &str = "domProps-";

/// Whether `attr` on element `tag` must be set as a DOM property.
///
/// `type_hint` is the value of the sibling `type` property, if it is a string.
pub fn must_use_dom_props(tag: &str, type_hint: Option<&str>, attr: &str) -> bool {
    match attr {
        "value" => ACCEPT_VALUE.contains(&tag) && type_hint != Some("button"),
        "selected" => tag == "option",
        "checked" => tag == "input",
        "muted" => tag == "video",
        _ => false,
    }
}

/// Rename keys that must be DOM properties to `domProps-<key>`.
///
/// Renamed keys keep their position. Component tags are left untouched.
pub fn apply_dom_props_overrides(tag: &Tag, props: PropertyBag) -> PropertyBag {
    let Some(element) = tag.element() else {
        return props;
    };
    let type_hint = props.get("type").and_then(|v| v.as_str()).map(str::to_owned);

    let mut adjusted = PropertyBag::with_capacity(props.len());
    for (key, value) in props {
        if must_use_dom_props(element, type_hint.as_deref(), &key) {
            tracing::trace!(tag = element, key = key.as_str(), "using dom property");
            adjusted.insert(format!("{DOM_PROPS_RENAME_PREFIX}{key}"), value);
        } else {
            adjusted.insert(key, value);
        }
    }
    adjusted
}
