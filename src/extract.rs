//! Per-document link extraction
//!
//! Every `reference` in a resolved document becomes one [`LinkAnnotation`]:
//!
//! - name: the reference's `name`, else its `refid`, else empty
//! - href: `refuri` when resolved, else `#<refid>` for an in-page anchor, else none
//! - title: the reference's text
//! - label: `link_<name>`
//!
//! The annotations are wrapped in a `document_links` container inserted as the
//! first child of the document. Unresolvable references are not errors; they
//! produce an annotation without href.

use crate::tree::{Document, Element, NodeKind};

pub const LABEL_PREFIX: &str = "link_";

/// One hyperlink found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkAnnotation {
    href: Option<String>,
    title: String,
    label: String,
}

impl LinkAnnotation {
    pub fn new(href: Option<String>, title: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href,
            title: title.into(),
            label: label.into(),
        }
    }

    /// Annotation for a `reference` element.
    pub fn from_reference(reference: &Element) -> Self {
        let refid = reference.attr("refid");
        let name = reference
            .attr("name")
            .filter(|name| !name.is_empty())
            .or(refid)
            .unwrap_or("");
        let href = match reference.attr("refuri").filter(|uri| !uri.is_empty()) {
            Some(uri) => Some(uri.to_string()),
            None => refid.map(|id| format!("#{}", id)),
        };
        Self {
            href,
            title: reference.text(),
            label: format!("{}{}", LABEL_PREFIX, name),
        }
    }

    /// Read back a `document_link` element. Other kinds give `None`.
    pub fn from_element(element: &Element) -> Option<Self> {
        if element.kind != NodeKind::DocumentLink {
            return None;
        }
        Some(Self {
            href: element.attr("xlink:href").map(str::to_string),
            title: element.attr("xlink:title").unwrap_or_default().to_string(),
            label: element.attr("xlink:label").unwrap_or_default().to_string(),
        })
    }

    /// The `document_link` element for this annotation.
    pub fn to_element(&self) -> Element {
        let mut element = Element::new(NodeKind::DocumentLink);
        if let Some(href) = &self.href {
            element.attributes.set("xlink:href", href);
        }
        element
            .with_attr("xlink:title", &self.title)
            .with_attr("xlink:label", &self.label)
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// One annotation per `reference` in `document`, in document order.
pub fn extract_links(document: &Document) -> Vec<LinkAnnotation> {
    document
        .elements_of(&NodeKind::Reference)
        .map(LinkAnnotation::from_reference)
        .collect()
}

/// Extract the links and insert them as a `document_links` container at the
/// front of `document`.
pub fn insert_link_container(document: &mut Document) -> Vec<LinkAnnotation> {
    let links = extract_links(document);
    let container = Element::new(NodeKind::DocumentLinks)
        .with_children(links.iter().map(|link| link.to_element().into()));
    document.insert_first(container);
    links
}
