//! Tree nodes and node kinds

use super::attributes::{AttrValue, Attributes};
use std::fmt;

/// Kind of an element.
///
/// The first group are kinds produced by the host engine, the second group are
/// the kinds this crate adds to the tree. Anything else is carried as
/// [`NodeKind::Other`] with its tag name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Section,
    Title,
    Paragraph,
    Reference,
    Target,
    BulletList,
    ListItem,
    CompactParagraph,
    Toctree,
    Caption,
    Index,

    RelLinks,
    DocumentLink,
    DocumentRef,
    DocumentLinks,
    DocumentToctree,
    ToctreeList,
    ToctreeListItem,
    ToctreeLink,

    Other(String),
}

impl NodeKind {
    /// Tag name used when the element is written out.
    pub fn tag_name(&self) -> &str {
        match self {
            NodeKind::Section => "section",
            NodeKind::Title => "title",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Reference => "reference",
            NodeKind::Target => "target",
            NodeKind::BulletList => "bullet_list",
            NodeKind::ListItem => "list_item",
            NodeKind::CompactParagraph => "compact_paragraph",
            NodeKind::Toctree => "toctree",
            NodeKind::Caption => "caption",
            NodeKind::Index => "index",
            NodeKind::RelLinks => "rel_links",
            NodeKind::DocumentLink => "document_link",
            NodeKind::DocumentRef => "document_ref",
            NodeKind::DocumentLinks => "document_links",
            NodeKind::DocumentToctree => "document_toctree",
            NodeKind::ToctreeList => "toctree_list",
            NodeKind::ToctreeListItem => "toctree_list_item",
            NodeKind::ToctreeLink => "toctree_link",
            NodeKind::Other(name) => name,
        }
    }

    /// Inverse of [`NodeKind::tag_name`]; unknown names become `Other`.
    pub fn from_tag_name(name: &str) -> Self {
        match name {
            "section" => NodeKind::Section,
            "title" => NodeKind::Title,
            "paragraph" => NodeKind::Paragraph,
            "reference" => NodeKind::Reference,
            "target" => NodeKind::Target,
            "bullet_list" => NodeKind::BulletList,
            "list_item" => NodeKind::ListItem,
            "compact_paragraph" => NodeKind::CompactParagraph,
            "toctree" => NodeKind::Toctree,
            "caption" => NodeKind::Caption,
            "index" => NodeKind::Index,
            "rel_links" => NodeKind::RelLinks,
            "document_link" => NodeKind::DocumentLink,
            "document_ref" => NodeKind::DocumentRef,
            "document_links" => NodeKind::DocumentLinks,
            "document_toctree" => NodeKind::DocumentToctree,
            "toctree_list" => NodeKind::ToctreeList,
            "toctree_list_item" => NodeKind::ToctreeListItem,
            "toctree_link" => NodeKind::ToctreeLink,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_name())
    }
}

/// An element: kind, attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub kind: NodeKind,
    pub attributes: Attributes,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            attributes: Attributes::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get_str(name)
    }

    /// Same kind and attributes, no children.
    pub fn shallow_copy(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            attributes: self.attributes.clone(),
            children: Vec::new(),
        }
    }

    /// Concatenated text of all descendant text leaves.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// This element and all descendant elements, in document order.
    pub fn descendants(&self) -> Elements<'_> {
        Elements {
            stack: vec![ElementOrNode::Element(self)],
        }
    }
}

/// A tree node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn kind(&self) -> Option<&NodeKind> {
        self.as_element().map(|e| &e.kind)
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Text content of this node.
    pub fn astext(&self) -> String {
        match self {
            Node::Element(element) => element.text(),
            Node::Text(text) => text.clone(),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}

enum ElementOrNode<'a> {
    Element(&'a Element),
    Node(&'a Node),
}

/// Pre-order iterator over elements.
pub struct Elements<'a> {
    stack: Vec<ElementOrNode<'a>>,
}

impl<'a> Elements<'a> {
    pub(crate) fn over(nodes: &'a [Node]) -> Self {
        Self {
            stack: nodes.iter().rev().map(ElementOrNode::Node).collect(),
        }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<&'a Element> {
        while let Some(entry) = self.stack.pop() {
            let element = match entry {
                ElementOrNode::Element(element) => element,
                ElementOrNode::Node(Node::Element(element)) => element,
                ElementOrNode::Node(Node::Text(_)) => continue,
            };
            self.stack
                .extend(element.children.iter().rev().map(ElementOrNode::Node));
            return Some(element);
        }
        None
    }
}

/// Call `f` on every element under `nodes`, parents before children.
pub(crate) fn try_for_each_element_mut<E, F>(nodes: &mut [Node], f: &mut F) -> Result<(), E>
where
    F: FnMut(&mut Element) -> Result<(), E>,
{
    for node in nodes {
        if let Node::Element(element) = node {
            f(element)?;
            try_for_each_element_mut(&mut element.children, f)?;
        }
    }
    Ok(())
}
