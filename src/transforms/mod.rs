//! Post-transform passes
//!
//! Passes run on each document after its references are resolved, in
//! ascending priority; passes with equal priority run in registration order.
//! Priority is the only ordering mechanism, so a pass that must observe
//! another's input (rel links reading `source`) is given a lower number than
//! the pass that removes it.
//!
//! Registered by default:
//!
//! | pass                  | priority |
//! |-----------------------|----------|
//! | index entries         | 900      |
//! | xlink namespace       | 900      |
//! | remove source attr    | 901      |
//! | rel links             | 900      |

mod index_entries;
mod namespace;
mod rel_links;

pub use index_entries::IndexEntriesTransform;
pub use namespace::{AddXlinkNamespace, RemoveSourceAttribute};
pub(crate) use namespace::XMLNS_XLINK;
pub use rel_links::{docname_from_source, RelLinksTransform};

use crate::config::LinksConfig;
use crate::error::Result;
use crate::host::BuildHost;
use crate::tree::Document;
use log::debug;

/// What a pass can see besides the document.
pub struct TransformContext<'a> {
    pub host: &'a dyn BuildHost,
    pub config: &'a LinksConfig,
}

/// A tree-rewriting pass.
pub trait Transform {
    fn name(&self) -> &'static str;

    fn priority(&self) -> u32;

    fn apply(&self, document: &mut Document, ctx: &TransformContext<'_>) -> Result<()>;
}

/// Ordered set of passes.
#[derive(Default)]
pub struct TransformRegistry {
    transforms: Vec<Box<dyn Transform>>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Transform + 'static>(&mut self, transform: T) {
        self.transforms.push(Box::new(transform));
    }

    /// Registry with the four active passes.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(IndexEntriesTransform);
        registry.register(AddXlinkNamespace);
        registry.register(RemoveSourceAttribute);
        registry.register(RelLinksTransform);
        registry
    }

    /// Passes in the order they run.
    pub fn ordered(&self) -> Vec<&dyn Transform> {
        let mut ordered: Vec<&dyn Transform> = self.transforms.iter().map(|t| t.as_ref()).collect();
        ordered.sort_by_key(|t| t.priority());
        ordered
    }

    /// Names in the order they run.
    pub fn names(&self) -> Vec<&'static str> {
        self.ordered().iter().map(|t| t.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Run every pass on `document`.
    pub fn apply_all(&self, document: &mut Document, ctx: &TransformContext<'_>) -> Result<()> {
        for transform in self.ordered() {
            debug!(
                "applying {} (priority {}) to '{}'",
                transform.name(),
                transform.priority(),
                document.name
            );
            transform.apply(document, ctx)?;
        }
        Ok(())
    }
}
