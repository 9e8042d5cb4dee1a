//! Element tag names.

use serde::Serialize;

/// The tag an element is created with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Tag {
    /// Intrinsic element (e.g., "div", "input")
    Element(String),
    /// Component reference (e.g., "Button")
    Component(String),
}

impl Tag {
    /// Classify a tag name the way JSX does: a lowercase initial is an
    /// intrinsic element, anything else (or a member path) is a component.
    pub fn from_name(name: &str) -> Self {
        let intrinsic = name.chars().next().is_some_and(|c| c.is_ascii_lowercase())
            && !name.contains('.');
        if intrinsic {
            Self::Element(name.to_string())
        } else {
            Self::Component(name.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Element(name) | Self::Component(name) => name,
        }
    }

    /// Element name, if this is an intrinsic element.
    pub fn element(&self) -> Option<&str> {
        match self {
            Self::Element(name) => Some(name),
            Self::Component(_) => None,
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Tag {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
