//! Build-scoped state and lifecycle hooks
//!
//! The host creates one [`LinksExtension`] per build and calls into it at
//! fixed points of its phase sequence:
//!
//! 1. [`LinksExtension::annotate_links`] for every document, once its
//!    references are resolved
//! 2. [`LinksExtension::apply_post_transforms`] then
//!    [`LinksExtension::document_resolved`] for every document
//! 3. [`LinksExtension::build_finished`] once
//!
//! The host must resolve references before step 1: an unresolved reference
//! yields a link without href.
//!
//! The accumulator lives here and is handed from step 2 to step 3; nothing is
//! kept between builds.

use crate::accumulator::LinkAccumulator;
use crate::aggregate::compose_links_document;
use crate::config::LinksConfig;
use crate::error::Result;
use crate::extract::{insert_link_container, LinkAnnotation};
use crate::host::{BuildError, BuildHost};
use crate::toctree::reconstruct_toctree;
use crate::transforms::{TransformContext, TransformRegistry};
use crate::tree::Document;
use log::{debug, info};

pub struct LinksExtension {
    config: LinksConfig,
    transforms: TransformRegistry,
    accumulator: LinkAccumulator,
}

impl LinksExtension {
    pub fn new(config: LinksConfig) -> Self {
        Self {
            config,
            transforms: TransformRegistry::with_defaults(),
            accumulator: LinkAccumulator::new(),
        }
    }

    pub fn config(&self) -> &LinksConfig {
        &self.config
    }

    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    pub fn accumulator(&self) -> &LinkAccumulator {
        &self.accumulator
    }

    /// Extract the links of a resolved document into a `document_links`
    /// container. Runs before the post-transforms, so the relation links they
    /// add are not extracted.
    pub fn annotate_links(&self, document: &mut Document) -> Vec<LinkAnnotation> {
        let links = insert_link_container(document);
        debug!("'{}': extracted {} link(s)", document.name, links.len());
        links
    }

    /// Run the registered passes on `document`.
    pub fn apply_post_transforms(&self, host: &dyn BuildHost, document: &mut Document) -> Result<()> {
        let ctx = TransformContext {
            host,
            config: &self.config,
        };
        self.transforms.apply_all(document, &ctx)
    }

    /// Snapshot the links of a resolved document.
    pub fn document_resolved(&mut self, document: &Document, docname: &str) {
        let count = self.accumulator.record(docname, document);
        debug!("'{}': accumulated {} link(s)", docname, count);
    }

    /// Write the links document unless the build failed.
    ///
    /// Returns whether a document was written. The accumulator is emptied
    /// either way.
    pub fn build_finished(
        &mut self,
        host: &mut dyn BuildHost,
        error: Option<&BuildError>,
    ) -> Result<bool> {
        let accumulator = std::mem::take(&mut self.accumulator);
        if let Some(error) = error {
            info!("skipping '{}': {}", self.config.output_name, error);
            return Ok(false);
        }

        let master_doc = self.config.master_doc.as_str();
        let toctree = host
            .render_toctree(master_doc)
            .map(|toc| reconstruct_toctree(master_doc, &toc))
            .transpose()?;
        if toctree.is_none() {
            debug!("no toctree rendered for '{}'", master_doc);
        }

        let document = compose_links_document(&accumulator, toctree, &self.config);
        host.write_document(&self.config.output_name, &document)?;
        info!(
            "wrote '{}' with {} document(s)",
            self.config.output_name,
            accumulator.len()
        );
        Ok(true)
    }
}

impl Default for LinksExtension {
    fn default() -> Self {
        Self::new(LinksConfig::default())
    }
}
