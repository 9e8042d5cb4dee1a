//! A host that builds a serializable node tree.

use serde::Serialize;
use vnode_jsx_data::{Host, NodeData, Tag};

/// A rendered node: either an element or a text node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<VNode>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Host that records every element as a [`VNode`].
#[derive(Debug, Default)]
pub struct JsonHost {
    /// Number of elements created
    pub elements: usize,
}

impl Host for JsonHost {
    type Node = VNode;

    fn create_element(
        &mut self,
        tag: &Tag,
        data: Option<NodeData>,
        children: Option<Vec<VNode>>,
    ) -> VNode {
        self.elements += 1;
        VNode {
            tag: Some(tag.name().to_string()),
            component: matches!(tag, Tag::Component(_)).then_some(true),
            data,
            children,
            text: None,
        }
    }

    fn create_text(&mut self, text: &str) -> VNode {
        VNode {
            tag: None,
            component: None,
            data: None,
            children: None,
            text: Some(text.to_string()),
        }
    }
}
