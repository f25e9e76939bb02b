//! # doclinks
//!
//! Link-graph annotations for documentation builds.
//!
//! A documentation engine calls into [`LinksExtension`] while it builds. The
//! extension annotates every document with its outgoing links and its
//! parent/previous/next relations, keeps the links of each resolved document,
//! and at the end of the build writes one synthetic document, `_links`, that
//! holds every document's links plus the master toctree in a uniform XLink
//! vocabulary.
//!
//! ## Layout
//!
//! - [`tree`]: the document tree the engine hands to passes
//! - [`host`]: what the extension needs from the engine ([`BuildHost`])
//! - [`transforms`]: post-transforms run on resolved documents
//! - [`extract`], [`accumulator`], [`toctree`], [`aggregate`]: the links pipeline
//! - [`extension`]: the build-scoped hooks tying it together
//! - [`formats`]: XML output for inspecting documents
//! - [`testing`]: an in-memory host and node factories

pub mod accumulator;
pub mod aggregate;
pub mod config;
pub mod error;
pub mod extension;
pub mod extract;
pub mod formats;
pub mod host;
pub mod testing;
pub mod toctree;
pub mod transforms;
pub mod tree;

pub use config::{GroupOrder, LinksConfig, Loader};
pub use error::{Error, Result};
pub use extension::LinksExtension;
pub use extract::LinkAnnotation;
pub use host::{BuildError, BuildHost, Relations};
pub use tree::{Document, Element, Node, NodeKind};
