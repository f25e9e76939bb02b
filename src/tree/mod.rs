//! Document tree model
//!
//! The tree the passes read and rewrite. It mirrors the host engine's doctree
//! closely enough for the passes to work on it directly:
//!
//! - [`Node`]: either an [`Element`] or a text leaf
//! - [`Element`]: a [`NodeKind`], ordered [`Attributes`] and children
//! - [`Document`]: the root, carrying the document name and root attributes
//!
//! Traversal comes in two flavors: iterators over elements in document order
//! ([`Document::elements`], [`Element::descendants`]) and the enter/leave
//! [`Visitor`] driven by [`walkabout`].

mod attributes;
mod document;
mod node;
mod visitor;

pub use attributes::{AttrValue, Attributes, IndexEntry};
pub use document::{Document, SOURCE_ATTR};
pub use node::{Element, Elements, Node, NodeKind};
pub use visitor::{walkabout, Visitor};
