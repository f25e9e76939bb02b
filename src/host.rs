//! Interface to the host documentation engine
//!
//! The engine parses sources, resolves cross-references, renders output and
//! drives the build phases. This crate only talks to it through [`BuildHost`].

use crate::error::Result;
use crate::tree::{Document, Node};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// One of the three navigation relations of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationSlot {
    Parent,
    Previous,
    Next,
}

impl RelationSlot {
    /// Slots in the order they are always emitted.
    pub const ALL: [RelationSlot; 3] = [
        RelationSlot::Parent,
        RelationSlot::Previous,
        RelationSlot::Next,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RelationSlot::Parent => "parent",
            RelationSlot::Previous => "previous",
            RelationSlot::Next => "next",
        }
    }
}

/// Parent, previous and next documents of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relations {
    pub parent: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl Relations {
    pub fn new(parent: Option<&str>, previous: Option<&str>, next: Option<&str>) -> Self {
        Self {
            parent: parent.map(str::to_string),
            previous: previous.map(str::to_string),
            next: next.map(str::to_string),
        }
    }

    pub fn get(&self, slot: RelationSlot) -> Option<&str> {
        match slot {
            RelationSlot::Parent => self.parent.as_deref(),
            RelationSlot::Previous => self.previous.as_deref(),
            RelationSlot::Next => self.next.as_deref(),
        }
    }

    /// Slots paired with their targets: parent, previous, next.
    pub fn slots(&self) -> impl Iterator<Item = (RelationSlot, Option<&str>)> {
        RelationSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

/// Document name → relations. Built once per build by the host.
pub type RelationMap = HashMap<String, Relations>;

/// Fatal error reported by the host when the build itself failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("build failed: {0}")]
pub struct BuildError(pub String);

/// What the host engine provides to the links pipeline.
pub trait BuildHost {
    /// Root directory document names are relative to.
    fn source_dir(&self) -> &Path;

    /// Navigation relations of every document in the navigable set.
    fn relations(&self) -> &RelationMap;

    /// Rendered title of a document.
    fn title(&self, docname: &str) -> Option<String>;

    /// Localized form of a fixed UI message.
    fn translate(&self, message: &str) -> String;

    /// The global table of contents rendered for `master_doc`, as bullet lists,
    /// list items, compact paragraphs, references, captions and text.
    fn render_toctree(&self, master_doc: &str) -> Option<Node>;

    /// Render `document` under the output name `name`.
    fn write_document(&mut self, name: &str, document: &Document) -> Result<()>;
}
