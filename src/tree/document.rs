//! Document root

use super::attributes::{AttrValue, Attributes};
use super::node::{try_for_each_element_mut, Element, Elements, Node, NodeKind};

/// Root attribute holding the absolute source path of the document.
pub const SOURCE_ATTR: &str = "source";

/// A document: its name, root attributes and top-level children.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.attributes.set(SOURCE_ATTR, source.into());
        self
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.attributes.get_str(SOURCE_ATTR)
    }

    /// Insert a node as the first child.
    pub fn insert_first(&mut self, node: impl Into<Node>) {
        self.children.insert(0, node.into());
    }

    /// All elements in document order.
    pub fn elements(&self) -> Elements<'_> {
        Elements::over(&self.children)
    }

    /// All elements of one kind, in document order.
    pub fn elements_of<'a>(&'a self, kind: &'a NodeKind) -> impl Iterator<Item = &'a Element> {
        self.elements().filter(move |e| &e.kind == kind)
    }

    /// Top-level elements of one kind.
    pub fn top_level_of<'a>(&'a self, kind: &'a NodeKind) -> impl Iterator<Item = &'a Element> {
        self.children
            .iter()
            .filter_map(Node::as_element)
            .filter(move |e| &e.kind == kind)
    }

    /// Call `f` on every element, parents before children, stopping at the first error.
    pub fn try_for_each_element_mut<E, F>(&mut self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&mut Element) -> Result<(), E>,
    {
        try_for_each_element_mut(&mut self.children, &mut f)
    }

    /// Text content of the whole document.
    pub fn text(&self) -> String {
        self.children.iter().map(Node::astext).collect()
    }
}
