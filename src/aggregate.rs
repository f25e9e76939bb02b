//! The synthetic links document
//!
//! One group per accumulated document, then the master toctree:
//!
//! ```text
//! <document xmlns:xlink="http://www.w3.org/1999/xlink">
//!   <document_ref xlink:href="page1" xlink:role=".../document"/>
//!   <document_ref xlink:href="index" xlink:role=".../document"/>
//!   <document_link xlink:href="page1" xlink:title="Page One" xlink:label="link_page1"/>
//!   <document_toctree docname="index" master="True">...</document_toctree>
//! </document>
//! ```

use crate::accumulator::LinkAccumulator;
use crate::config::{GroupOrder, LinksConfig};
use crate::extract::LinkAnnotation;
use crate::transforms::XMLNS_XLINK;
use crate::tree::{Document, Element, Node, NodeKind};

/// Compose the links document from the accumulated links and the
/// reconstructed toctree.
pub fn compose_links_document(
    accumulator: &LinkAccumulator,
    toctree: Option<Element>,
    config: &LinksConfig,
) -> Document {
    let mut document = Document::new(config.output_name.as_str())
        .with_attr(XMLNS_XLINK, config.xlink_namespace.as_str());

    for (docname, links) in accumulator.iter() {
        let group = document_group(docname, links, config);
        match config.aggregate.group_order {
            GroupOrder::Reversed => {
                document.children.splice(0..0, group);
            }
            GroupOrder::Accumulation => document.children.extend(group),
        }
    }

    if let Some(toctree) = toctree {
        document.children.push(toctree.into());
    }
    document
}

/// A `document_ref` marker followed by the document's links.
fn document_group(docname: &str, links: &[LinkAnnotation], config: &LinksConfig) -> Vec<Node> {
    let marker = Element::new(NodeKind::DocumentRef)
        .with_attr("xlink:href", docname)
        .with_attr("xlink:role", config.role("document"));
    std::iter::once(marker)
        .chain(links.iter().map(LinkAnnotation::to_element))
        .map(Node::from)
        .collect()
}
