//! Master toctree reconstruction
//!
//! The host renders the global table of contents as generic structure (bullet
//! lists, list items, compact paragraphs, references, text, captions). This
//! module rebuilds it into typed navigation nodes:
//!
//! ```text
//! compact_paragraph               document_toctree docname="index" master="True"
//!   caption "Contents"              caption "Contents"
//!   bullet_list            ==>      toctree_list
//!     list_item                       toctree_list_item
//!       compact_paragraph               toctree_link xlink:href="page1"
//!         reference refuri="page1"        "Page One"
//!           "Page One"
//! ```
//!
//! The walk keeps an explicit stack of output nodes seeded with the root.
//! Entering a node pushes its output counterpart; leaving pops the top and
//! appends it to the new top. Compact paragraphs are elided. Kinds with no
//! counterpart are copied through shallowly.

use crate::error::{Error, Result};
use crate::tree::{walkabout, Element, Node, NodeKind, Visitor};
use log::warn;

pub struct TocReconstructor {
    stack: Vec<Node>,
    balanced: bool,
}

impl TocReconstructor {
    pub fn new(master_doc: &str) -> Self {
        let root = Element::new(NodeKind::DocumentToctree).with_attr("docname", master_doc);
        Self {
            stack: vec![root.into()],
            balanced: true,
        }
    }

    /// The finished tree, marked as the master toctree.
    pub fn finish(mut self) -> Result<Element> {
        if !self.balanced || self.stack.len() != 1 {
            return Err(Error::UnbalancedToctree(self.stack.len()));
        }
        match self.stack.pop() {
            Some(Node::Element(root)) => Ok(root.with_attr("master", true)),
            _ => Err(Error::UnbalancedToctree(0)),
        }
    }

    fn open(&mut self, node: impl Into<Node>) {
        self.stack.push(node.into());
    }

    fn close(&mut self) {
        if self.stack.len() < 2 {
            self.balanced = false;
            return;
        }
        let Some(node) = self.stack.pop() else {
            return;
        };
        match self.stack.last_mut() {
            Some(Node::Element(parent)) => parent.children.push(node),
            _ => self.balanced = false,
        }
    }
}

impl Visitor for TocReconstructor {
    fn visit(&mut self, node: &Node) {
        let Node::Element(element) = node else {
            self.open(node.clone());
            return;
        };
        match &element.kind {
            NodeKind::CompactParagraph => {}
            NodeKind::BulletList => self.open(Element::new(NodeKind::ToctreeList)),
            NodeKind::ListItem => self.open(Element::new(NodeKind::ToctreeListItem)),
            NodeKind::Reference => {
                let mut link = Element::new(NodeKind::ToctreeLink);
                match element.attr("refuri") {
                    Some(uri) => link.attributes.set("xlink:href", uri),
                    None => warn!("toctree reference without refuri: '{}'", element.text()),
                }
                self.open(link);
            }
            _ => self.open(element.shallow_copy()),
        }
    }

    fn depart(&mut self, node: &Node) {
        if node.kind() == Some(&NodeKind::CompactParagraph) {
            return;
        }
        self.close();
    }
}

/// Rebuild the host-rendered toctree `toc` of `master_doc`.
pub fn reconstruct_toctree(master_doc: &str, toc: &Node) -> Result<Element> {
    let mut reconstructor = TocReconstructor::new(master_doc);
    walkabout(toc, &mut reconstructor);
    reconstructor.finish()
}
