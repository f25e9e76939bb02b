//! Output formats for documents
//!
//! - `xml`: the XML shape the host renderer writes, used to inspect `_links`

pub mod xml;

pub use xml::serialize_document as serialize_xml;
