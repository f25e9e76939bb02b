//! Whole builds through the in-memory host.

use doclinks::config::Loader;
use doclinks::error::Error;
use doclinks::formats::serialize_xml;
use doclinks::host::RelationMap;
use doclinks::testing::nodes::{
    anchor_reference, bullet_list, compact_paragraph, index, named_reference, paragraph, section,
    toc_entry,
};
use doclinks::testing::MemoryHost;
use doclinks::tree::IndexEntry;
use doclinks::{
    BuildError, BuildHost, Document, LinkAnnotation, LinksExtension, Node, NodeKind, Relations,
};
use std::path::Path;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn two_document_host() -> MemoryHost {
    init_logging();
    MemoryHost::new("/docs")
        .with_title("index", "Welcome")
        .with_title("page1", "Page One")
        .with_relations("index", Relations::new(None, None, Some("page1")))
        .with_relations("page1", Relations::new(Some("index"), Some("index"), None))
        .with_toctree(compact_paragraph(vec![bullet_list(vec![toc_entry(
            "Page One", "page1", None,
        )])]))
}

fn two_documents(host: &MemoryHost) -> Vec<Document> {
    vec![
        host.document(
            "index",
            vec![paragraph(vec![
                Node::text("See "),
                named_reference("Page One", "page1", "page1"),
            ])],
        ),
        host.document("page1", vec![paragraph(vec![Node::text("No links here.")])]),
    ]
}

fn kinds(document: &Document) -> Vec<NodeKind> {
    document
        .children
        .iter()
        .filter_map(|child| child.kind().cloned())
        .collect()
}

#[test]
fn test_two_document_build() {
    let mut host = two_document_host();
    let documents = two_documents(&host);
    let mut extension = LinksExtension::default();

    assert!(host.run_build(&mut extension, documents, None).unwrap());
    assert!(extension.accumulator().is_empty());

    let links = host.written_document("_links").unwrap();
    assert_eq!(
        kinds(links),
        vec![
            NodeKind::DocumentRef,
            NodeKind::DocumentRef,
            NodeKind::DocumentLink,
            NodeKind::DocumentToctree,
        ]
    );

    let link = links.children[2].as_element().unwrap();
    assert_eq!(
        LinkAnnotation::from_element(link),
        Some(LinkAnnotation::new(
            Some("page1".into()),
            "Page One",
            "link_page1"
        ))
    );

    let xml = serialize_xml(links).unwrap();
    insta::assert_snapshot!(xml.trim_end(), @r#"
    <?xml version="1.0" encoding="utf-8"?>
    <document xmlns:xlink="http://www.w3.org/1999/xlink">
      <document_ref xlink:href="page1" xlink:role="http://heptet.us/linkprops/document"/>
      <document_ref xlink:href="index" xlink:role="http://heptet.us/linkprops/document"/>
      <document_link xlink:href="page1" xlink:title="Page One" xlink:label="link_page1"/>
      <document_toctree docname="index" master="True">
        <toctree_list>
          <toctree_list_item>
            <toctree_link xlink:href="page1">Page One</toctree_link>
          </toctree_list_item>
        </toctree_list>
      </document_toctree>
    </document>
    "#);
}

#[test]
fn test_resolved_documents_carry_annotations() {
    let mut host = two_document_host();
    let documents = two_documents(&host);
    host.run_build(&mut LinksExtension::default(), documents, None)
        .unwrap();

    let index = host.resolved_document("index").unwrap();
    assert_eq!(
        kinds(index),
        vec![
            NodeKind::RelLinks,
            NodeKind::DocumentLinks,
            NodeKind::Paragraph
        ]
    );
    assert_eq!(index.source(), None);
    assert_eq!(
        index.attributes.get_str("xmlns:xlink"),
        Some("http://www.w3.org/1999/xlink")
    );

    let rel_links = index.children[0].as_element().unwrap();
    let hrefs: Vec<_> = rel_links
        .children
        .iter()
        .filter_map(Node::as_element)
        .map(|link| link.attr("xlink:href"))
        .collect();
    assert_eq!(hrefs, vec![None, None, Some("page1")]);
    assert_eq!(rel_links.children[2].astext(), "Page One");

    // links are taken before the relation references are added
    let container = index.children[1].as_element().unwrap();
    assert_eq!(container.children.len(), 1);

    let page1 = host.resolved_document("page1").unwrap();
    let rel_links = page1.children[0].as_element().unwrap();
    assert_eq!(rel_links.children[0].astext(), "Welcome");
    assert_eq!(rel_links.children[1].astext(), "Welcome");
}

#[test]
fn test_document_without_relations_gets_no_rel_links() {
    let mut host = MemoryHost::new("/docs");
    let documents = vec![host.document("orphan", vec![paragraph(vec![Node::text("alone")])])];
    host.run_build(&mut LinksExtension::default(), documents, None)
        .unwrap();

    let orphan = host.resolved_document("orphan").unwrap();
    assert!(orphan.elements_of(&NodeKind::RelLinks).next().is_none());

    // no rendered toctree
    let links = host.written_document("_links").unwrap();
    assert_eq!(kinds(links), vec![NodeKind::DocumentRef]);
}

#[test]
fn test_fatal_error_writes_nothing() {
    let mut host = two_document_host();
    let documents = two_documents(&host);
    let mut extension = LinksExtension::default();

    let written = host
        .run_build(
            &mut extension,
            documents,
            Some(BuildError("reference target not found".into())),
        )
        .unwrap();

    assert!(!written);
    assert!(host.written().is_empty());
    assert!(extension.accumulator().is_empty());
}

#[test]
fn test_accumulation_order_from_config() {
    let config = Loader::new()
        .with_override("aggregate.group_order", "accumulation")
        .unwrap()
        .with_override("output_name", "links")
        .unwrap()
        .build()
        .unwrap();
    let mut host = two_document_host();
    let documents = two_documents(&host);
    host.run_build(&mut LinksExtension::new(config), documents, None)
        .unwrap();

    assert!(host.written_document("_links").is_none());
    let links = host.written_document("links").unwrap();
    let refs: Vec<_> = links
        .elements_of(&NodeKind::DocumentRef)
        .filter_map(|e| e.attr("xlink:href"))
        .collect();
    assert_eq!(refs, vec!["index", "page1"]);
    assert_eq!(links.children[1].kind(), Some(&NodeKind::DocumentLink));
}

#[test]
fn test_index_entries_serialized_in_resolved_document() {
    let mut host = MemoryHost::new("/docs");
    let entries = vec![IndexEntry::single("doclinks", "index-0")];
    let documents = vec![host.document("index", vec![index(entries.clone())])];
    host.run_build(&mut LinksExtension::default(), documents, None)
        .unwrap();

    let resolved = host.resolved_document("index").unwrap();
    let node = resolved.elements_of(&NodeKind::Index).next().unwrap();
    let json = node.attr("entries").unwrap();
    let parsed: Vec<IndexEntry> = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, entries);
}

#[test]
fn test_anchor_reference_in_nested_source() {
    let mut host = MemoryHost::new("/docs")
        .with_suffix(".txt")
        .with_relations("guide/setup", Relations::new(Some("index"), None, None));
    let documents = vec![host.document(
        "guide/setup",
        vec![section(
            "Setup",
            vec![paragraph(vec![
                Node::text("Jump to "),
                anchor_reference("Install", "install"),
            ])],
        )],
    )];
    host.run_build(&mut LinksExtension::default(), documents, None)
        .unwrap();

    // relations are keyed by the docname derived from `guide/setup.txt`
    let resolved = host.resolved_document("guide/setup").unwrap();
    assert_eq!(resolved.children[0].kind(), Some(&NodeKind::RelLinks));

    let links = host.written_document("_links").unwrap();
    let xml = serialize_xml(links).unwrap();
    insta::assert_snapshot!(xml.trim_end(), @r##"
    <?xml version="1.0" encoding="utf-8"?>
    <document xmlns:xlink="http://www.w3.org/1999/xlink">
      <document_ref xlink:href="guide/setup" xlink:role="http://heptet.us/linkprops/document"/>
      <document_link xlink:href="#install" xlink:title="Install" xlink:label="link_install"/>
    </document>
    "##);
}

/// A host whose output directory cannot be written.
struct ReadOnlyHost {
    relations: RelationMap,
}

impl BuildHost for ReadOnlyHost {
    fn source_dir(&self) -> &Path {
        Path::new("/docs")
    }

    fn relations(&self) -> &RelationMap {
        &self.relations
    }

    fn title(&self, _docname: &str) -> Option<String> {
        None
    }

    fn translate(&self, message: &str) -> String {
        message.to_string()
    }

    fn render_toctree(&self, _master_doc: &str) -> Option<Node> {
        None
    }

    fn write_document(&mut self, name: &str, _document: &Document) -> doclinks::Result<()> {
        Err(Error::Write {
            name: name.to_string(),
            message: "read-only file system".into(),
        })
    }
}

#[test]
fn test_write_failure_propagates() {
    let mut host = ReadOnlyHost {
        relations: RelationMap::new(),
    };
    let mut extension = LinksExtension::default();
    let err = extension.build_finished(&mut host, None).unwrap_err();
    assert!(matches!(err, Error::Write { name, .. } if name == "_links"));
}

#[test]
fn test_missing_source_is_fatal() {
    let host = MemoryHost::new("/docs");
    let mut document = Document::new("index");
    let err = LinksExtension::default()
        .apply_post_transforms(&host, &mut document)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingAttribute {
            attribute: "source",
            ..
        }
    ));
}
