//! Reshapes flat JSX property bags into structured virtual node data.
//!
//! JSX compiles `<input value={v} on-input={set} v-focus />` into a call with
//! one flat bag of props. Rendering frameworks built around node data expect
//! those props grouped: attributes under `attrs`, listeners under `on`,
//! directives in a list, and so on. This crate classifies every key of the
//! bag and writes it into the right place, and provides a [`Renderer`] that
//! does this for every element a host creates.

pub mod classify;
pub mod dom_props;
pub mod node;
pub mod reshape;
pub mod shim;
pub mod snippet;
pub mod tag;
pub mod value;

pub use classify::{classify_key, classify_keys, Bucket, ClassifiedKeys};
pub use dom_props::{apply_dom_props_overrides, must_use_dom_props};
pub use node::{Directive, NodeData};
pub use reshape::{parse_nestable_key, to_node_data};
pub use shim::{create_element, Host, Renderer};
pub use snippet::{parse_snippet, SnippetChild, SnippetElement, SnippetError};
pub use tag::Tag;
pub use value::{bag, PropValue, PropertyBag};
