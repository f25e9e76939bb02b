//! XML serialization of documents
//!
//! The shape matches what the host's XML renderer writes for `_links`:
//!
//! - Document root → `<document>` carrying the root attributes
//! - Element kind → tag name (snake_case)
//! - Childless elements self-close
//! - Elements holding any text are written on one line, children included,
//!   so no whitespace is added to their text
//! - Everything else nests, two spaces per level
//!
//! ## Example
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <document xmlns:xlink="http://www.w3.org/1999/xlink">
//!   <document_ref xlink:href="page1" xlink:title="Page One" xlink:role="http://heptet.us/linkprops/document"/>
//!   <document_toctree docname="index" master="True"/>
//! </document>
//! ```

use crate::error::Result;
use crate::tree::{AttrValue, Attributes, Document, Node};
use quick_xml::escape::escape;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const ROOT_TAG: &str = "document";

struct XmlSerializer {
    output: String,
    indent_level: usize,
}

impl XmlSerializer {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn serialize_document(mut self, doc: &Document) -> Result<String> {
        self.output.push_str(XML_DECLARATION);
        self.output.push('\n');
        self.serialize_element(ROOT_TAG, &doc.attributes, &doc.children)?;
        Ok(self.output)
    }

    fn serialize_element(
        &mut self,
        tag: &str,
        attributes: &Attributes,
        children: &[Node],
    ) -> Result<()> {
        let open = format!("<{}{}", tag, render_attributes(attributes)?);

        if children.is_empty() {
            self.push_indent(&open);
            self.output.push_str("/>\n");
            return Ok(());
        }

        if children.iter().any(|child| matches!(child, Node::Text(_))) {
            self.push_indent(&open);
            self.output.push('>');
            for child in children {
                write_inline(&mut self.output, child)?;
            }
            self.output.push_str(&format!("</{}>\n", tag));
            return Ok(());
        }

        self.push_indent(&open);
        self.output.push_str(">\n");
        self.indent_level += 1;
        for element in children.iter().filter_map(Node::as_element) {
            self.serialize_element(
                element.kind.tag_name(),
                &element.attributes,
                &element.children,
            )?;
        }
        self.indent_level -= 1;
        self.push_indent(&format!("</{}>\n", tag));
        Ok(())
    }
}

/// Write `node` and its subtree without any added whitespace.
fn write_inline(output: &mut String, node: &Node) -> Result<()> {
    let element = match node {
        Node::Text(text) => {
            output.push_str(&escape(text.as_str()));
            return Ok(());
        }
        Node::Element(element) => element,
    };
    let tag = element.kind.tag_name();
    output.push_str(&format!("<{}{}", tag, render_attributes(&element.attributes)?));
    if element.children.is_empty() {
        output.push_str("/>");
        return Ok(());
    }
    output.push('>');
    for child in &element.children {
        write_inline(output, child)?;
    }
    output.push_str(&format!("</{}>", tag));
    Ok(())
}

fn render_attributes(attributes: &Attributes) -> Result<String> {
    let mut rendered = String::new();
    for (name, value) in attributes.iter() {
        let value = attr_text(value)?;
        rendered.push_str(&format!(" {}=\"{}\"", name, escape(value.as_str())));
    }
    Ok(rendered)
}

/// Attribute values as the host's writer renders them.
fn attr_text(value: &AttrValue) -> Result<String> {
    Ok(match value {
        AttrValue::Str(s) => s.clone(),
        AttrValue::Bool(true) => "True".to_string(),
        AttrValue::Bool(false) => "False".to_string(),
        AttrValue::Entries(entries) => serde_json::to_string(entries)?,
    })
}

/// Serialize a document to XML.
pub fn serialize_document(doc: &Document) -> Result<String> {
    XmlSerializer::new().serialize_document(doc)
}
