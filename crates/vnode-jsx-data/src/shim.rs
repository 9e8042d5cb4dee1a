//! Integration with the host framework's node constructor.

use crate::node::NodeData;
use crate::reshape::to_node_data;
use crate::tag::Tag;
use crate::value::PropertyBag;

/// A host framework's node constructor.
pub trait Host {
    /// The host's virtual node type.
    type Node;

    /// Create a node.
    ///
    /// `children` is `None` when no children were supplied, which the host
    /// may treat differently from an empty list.
    fn create_element(
        &mut self,
        tag: &Tag,
        data: Option<NodeData>,
        children: Option<Vec<Self::Node>>,
    ) -> Self::Node;

    /// Create a text node.
    fn create_text(&mut self, text: &str) -> Self::Node;
}

/// Create a node from a flat JSX property bag.
///
/// Present data is reshaped into [`NodeData`] first; absent data is passed
/// through as `None`. An empty child list becomes `None`.
pub fn create_element<H: Host + ?Sized>(
    host: &mut H,
    tag: &Tag,
    data: Option<PropertyBag>,
    children: Vec<H::Node>,
) -> H::Node {
    let children = if children.is_empty() {
        None
    } else {
        Some(children)
    };

    let data = data.map(|props| to_node_data(tag, props));
    host.create_element(tag, data, children)
}

/// Wraps a host so element creation goes through JSX reshaping once installed.
#[derive(Debug, Default)]
pub struct Renderer<H> {
    host: H,
    jsx_installed: bool,
}

impl<H: Host> Renderer<H> {
    /// Wrap a host. JSX reshaping is not installed yet.
    pub fn new(host: H) -> Self {
        Self {
            host,
            jsx_installed: false,
        }
    }

    /// Wrap a host with JSX reshaping already installed.
    pub fn with_jsx(host: H) -> Self {
        let mut renderer = Self::new(host);
        renderer.install_jsx();
        renderer
    }

    /// Install JSX reshaping.
    ///
    /// Returns `false` if it was already installed, in which case nothing changes.
    pub fn install_jsx(&mut self) -> bool {
        if self.jsx_installed {
            tracing::debug!("jsx reshaping already installed");
            return false;
        }
        self.jsx_installed = true;
        tracing::debug!("installed jsx reshaping");
        true
    }

    pub fn is_jsx_installed(&self) -> bool {
        self.jsx_installed
    }

    /// Create a node.
    ///
    /// Before installation the call is forwarded verbatim: the flat bag is
    /// handed over as-is and the child list is never collapsed.
    pub fn h(
        &mut self,
        tag: impl Into<Tag>,
        data: Option<PropertyBag>,
        children: Vec<H::Node>,
    ) -> H::Node {
        let tag = tag.into();
        if self.jsx_installed {
            create_element(&mut self.host, &tag, data, children)
        } else {
            self.host
                .create_element(&tag, data.map(NodeData::from_fields), Some(children))
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
