//! Cross-document link accumulator
//!
//! Holds, per document name, the links captured when that document finished
//! resolving. Entries keep the order in which documents were first recorded;
//! recording a document again replaces its links in place.

use crate::extract::LinkAnnotation;
use crate::tree::{Document, Node, NodeKind};
use indexmap::IndexMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkAccumulator {
    entries: IndexMap<String, Vec<LinkAnnotation>>,
}

impl LinkAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the links of `document` under `docname`. Returns how many were stored.
    pub fn record(&mut self, docname: &str, document: &Document) -> usize {
        let links = collect_links(document);
        let count = links.len();
        self.insert(docname, links);
        count
    }

    /// Store `links` under `docname`, replacing any earlier entry.
    pub fn insert(&mut self, docname: impl Into<String>, links: Vec<LinkAnnotation>) {
        self.entries.insert(docname.into(), links);
    }

    pub fn get(&self, docname: &str) -> Option<&[LinkAnnotation]> {
        self.entries.get(docname).map(Vec::as_slice)
    }

    /// Entries in first-recorded order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LinkAnnotation])> {
        self.entries
            .iter()
            .map(|(name, links)| (name.as_str(), links.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Links held by the top-level `document_links` containers of `document`.
pub fn collect_links(document: &Document) -> Vec<LinkAnnotation> {
    document
        .top_level_of(&NodeKind::DocumentLinks)
        .flat_map(|container| container.children.iter())
        .filter_map(Node::as_element)
        .filter_map(LinkAnnotation::from_element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::insert_link_container;
    use crate::tree::Element;

    fn doc_with_link(name: &str, target: &str) -> Document {
        let mut doc = Document::new(name).with_children(vec![Element::new(NodeKind::Paragraph)
            .with_child(
                Element::new(NodeKind::Reference)
                    .with_attr("refuri", target)
                    .with_child(Node::text(target)),
            )
            .into()]);
        insert_link_container(&mut doc);
        doc
    }

    #[test]
    fn test_record_snapshots_links() {
        let mut acc = LinkAccumulator::new();
        let mut doc = doc_with_link("index", "page1");
        assert_eq!(acc.record("index", &doc), 1);

        // Later changes to the tree do not reach the stored entry.
        doc.children.clear();
        let stored = acc.get("index").unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].href(), Some("page1"));
    }

    #[test]
    fn test_rerecord_overwrites_in_place() {
        let mut acc = LinkAccumulator::new();
        acc.record("a", &doc_with_link("a", "x"));
        acc.record("b", &doc_with_link("b", "y"));
        acc.record("a", &doc_with_link("a", "z"));

        assert_eq!(acc.len(), 2);
        let order: Vec<_> = acc.iter().map(|(name, _)| name).collect();
        assert_eq!(order, vec!["a", "b"]);
        assert_eq!(acc.get("a").unwrap()[0].href(), Some("z"));
    }

    #[test]
    fn test_relation_links_are_not_collected() {
        let mut doc = doc_with_link("page1", "index");
        doc.insert_first(
            Element::new(NodeKind::RelLinks).with_child(
                Element::new(NodeKind::DocumentLink)
                    .with_attr("xlink:href", "index")
                    .with_attr("xlink:title", "Parent"),
            ),
        );
        let links = collect_links(&doc);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label(), "link_");
    }

    #[test]
    fn test_document_without_container_records_empty() {
        let mut acc = LinkAccumulator::new();
        assert_eq!(acc.record("bare", &Document::new("bare")), 0);
        assert_eq!(acc.get("bare"), Some(&[][..]));
    }
}
