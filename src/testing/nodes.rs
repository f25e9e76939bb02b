//! Factories for the node shapes the engine produces

use crate::tree::{Element, IndexEntry, Node, NodeKind};

/// A resolved reference to another document or URL.
pub fn reference(text: &str, refuri: &str) -> Node {
    Element::new(NodeKind::Reference)
        .with_attr("refuri", refuri)
        .with_child(Node::text(text))
        .into()
}

/// A named reference, as produced by explicit hyperlink targets.
pub fn named_reference(text: &str, name: &str, refuri: &str) -> Node {
    Element::new(NodeKind::Reference)
        .with_attr("name", name)
        .with_attr("refuri", refuri)
        .with_child(Node::text(text))
        .into()
}

/// A reference to an anchor in the same document.
pub fn anchor_reference(text: &str, refid: &str) -> Node {
    Element::new(NodeKind::Reference)
        .with_attr("refid", refid)
        .with_child(Node::text(text))
        .into()
}

pub fn paragraph(children: Vec<Node>) -> Node {
    Element::new(NodeKind::Paragraph)
        .with_children(children)
        .into()
}

pub fn section(title: &str, children: Vec<Node>) -> Node {
    Element::new(NodeKind::Section)
        .with_child(Element::new(NodeKind::Title).with_child(Node::text(title)))
        .with_children(children)
        .into()
}

pub fn index(entries: Vec<IndexEntry>) -> Node {
    Element::new(NodeKind::Index)
        .with_attr("entries", entries)
        .into()
}

pub fn bullet_list(items: Vec<Node>) -> Node {
    Element::new(NodeKind::BulletList)
        .with_children(items)
        .into()
}

pub fn compact_paragraph(children: Vec<Node>) -> Node {
    Element::new(NodeKind::CompactParagraph)
        .with_children(children)
        .into()
}

pub fn caption(text: &str) -> Node {
    Element::new(NodeKind::Caption)
        .with_child(Node::text(text))
        .into()
}

/// One toctree entry: a list item holding a compact paragraph with the
/// reference, optionally followed by a nested list.
pub fn toc_entry(title: &str, refuri: &str, nested: Option<Node>) -> Node {
    Element::new(NodeKind::ListItem)
        .with_child(compact_paragraph(vec![reference(title, refuri)]))
        .with_children(nested)
        .into()
}
