//! In-memory host and node factories
//!
//! [`MemoryHost`] stands in for the documentation engine: it knows the source
//! directory, titles, relations, translations and the rendered master
//! toctree, and it keeps every document written to it. [`MemoryHost::run_build`]
//! drives the hooks in the engine's phase order:
//!
//! 1. annotate: `annotate_links` on every document; documents handed to
//!    `run_build` are taken as already resolved
//! 2. post-transform: post-transforms and `document_resolved` on every document
//! 3. finish: `build_finished`
//!
//! ```rust,ignore
//! let mut host = MemoryHost::new("/docs")
//!     .with_title("page1", "Page One")
//!     .with_toctree(toc);
//! let docs = vec![host.document("index", body)];
//! host.run_build(&mut LinksExtension::default(), docs, None)?;
//! let links = host.written_document("_links").unwrap();
//! ```

pub mod nodes;

use crate::error::Result;
use crate::extension::LinksExtension;
use crate::host::{BuildError, BuildHost, RelationMap, Relations};
use crate::tree::{Document, Node};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MemoryHost {
    source_dir: PathBuf,
    suffix: String,
    relations: RelationMap,
    titles: HashMap<String, String>,
    translations: HashMap<String, String>,
    toctree: Option<Node>,
    resolved: Vec<Document>,
    written: Vec<(String, Document)>,
}

impl MemoryHost {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            suffix: ".rst".to_string(),
            ..Self::default()
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_relations(mut self, docname: impl Into<String>, relations: Relations) -> Self {
        self.relations.insert(docname.into(), relations);
        self
    }

    pub fn with_title(mut self, docname: impl Into<String>, title: impl Into<String>) -> Self {
        self.titles.insert(docname.into(), title.into());
        self
    }

    pub fn with_translation(mut self, message: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(message.into(), text.into());
        self
    }

    pub fn with_toctree(mut self, toctree: Node) -> Self {
        self.toctree = Some(toctree);
        self
    }

    /// Absolute source path of `docname`.
    pub fn source_path(&self, docname: &str) -> PathBuf {
        self.source_dir.join(format!("{}{}", docname, self.suffix))
    }

    /// A parsed document as the engine would hand it over.
    pub fn document(&self, docname: &str, children: Vec<Node>) -> Document {
        Document::new(docname)
            .with_source(self.source_path(docname).to_string_lossy().into_owned())
            .with_children(children)
    }

    /// Documents as they were after their post-transforms, in build order.
    pub fn resolved(&self) -> &[Document] {
        &self.resolved
    }

    pub fn resolved_document(&self, docname: &str) -> Option<&Document> {
        self.resolved.iter().find(|doc| doc.name == docname)
    }

    pub fn written(&self) -> &[(String, Document)] {
        &self.written
    }

    pub fn written_document(&self, name: &str) -> Option<&Document> {
        self.written
            .iter()
            .find(|(written, _)| written == name)
            .map(|(_, doc)| doc)
    }

    /// Run a whole build of `documents`. Returns whether the links document
    /// was written.
    pub fn run_build(
        &mut self,
        extension: &mut LinksExtension,
        mut documents: Vec<Document>,
        error: Option<BuildError>,
    ) -> Result<bool> {
        for document in documents.iter_mut() {
            extension.annotate_links(document);
        }
        for mut document in documents {
            extension.apply_post_transforms(&*self, &mut document)?;
            let docname = document.name.clone();
            extension.document_resolved(&document, &docname);
            self.resolved.push(document);
        }
        extension.build_finished(self, error.as_ref())
    }
}

impl BuildHost for MemoryHost {
    fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn relations(&self) -> &RelationMap {
        &self.relations
    }

    fn title(&self, docname: &str) -> Option<String> {
        self.titles.get(docname).cloned()
    }

    fn translate(&self, message: &str) -> String {
        self.translations
            .get(message)
            .cloned()
            .unwrap_or_else(|| message.to_string())
    }

    fn render_toctree(&self, _master_doc: &str) -> Option<Node> {
        self.toctree.clone()
    }

    fn write_document(&mut self, name: &str, document: &Document) -> Result<()> {
        self.written.push((name.to_string(), document.clone()));
        Ok(())
    }
}
