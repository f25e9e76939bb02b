//! Navigation relation links
//!
//! Injects a `rel_links` extended link at the front of every document that is
//! part of the navigable set:
//!
//! ```text
//! <rel_links xlink:type="extended">
//!   <document_link xlink:title="Parent" xlink:role=".../parent" xlink:href="index">
//!     <reference refuri="index">Welcome</reference>
//!   </document_link>
//!   <document_link xlink:title="Previous topic" xlink:role=".../previous"/>
//!   <document_link xlink:title="Next topic" xlink:role=".../next" xlink:href="page2">
//!     <reference refuri="page2">Page Two</reference>
//!   </document_link>
//! </rel_links>
//! ```
//!
//! All three slots are always present; an empty slot keeps its title and role
//! but has no href and no reference.

use super::{Transform, TransformContext};
use crate::error::{Error, Result};
use crate::host::{RelationSlot, Relations};
use crate::tree::{Document, Element, Node, NodeKind, SOURCE_ATTR};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

static EXTENSION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.[^./]+$").unwrap());

const PARENT_TITLE: &str = "Parent";
const PREVIOUS_MESSAGE: &str = "Previous topic";
const NEXT_MESSAGE: &str = "Next topic";

/// Document name for a source path: extension stripped, relative to `source_dir`,
/// `/`-separated.
pub fn docname_from_source(source: &str, source_dir: &Path) -> String {
    let stem = EXTENSION.replace(source, "");
    let stem = Path::new(stem.as_ref());
    let relative = pathdiff::diff_paths(stem, source_dir).unwrap_or_else(|| PathBuf::from(stem));
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub struct RelLinksTransform;

impl Transform for RelLinksTransform {
    fn name(&self) -> &'static str {
        "rel-links"
    }

    fn priority(&self) -> u32 {
        900
    }

    fn apply(&self, document: &mut Document, ctx: &TransformContext<'_>) -> Result<()> {
        let source = document.source().ok_or(Error::MissingAttribute {
            pass: self.name(),
            attribute: SOURCE_ATTR,
        })?;
        let docname = docname_from_source(source, ctx.host.source_dir());

        let Some(relations) = ctx.host.relations().get(&docname) else {
            debug!("'{}' has no relations, skipping rel links", docname);
            return Ok(());
        };

        document.insert_first(rel_links(relations, ctx));
        Ok(())
    }
}

fn rel_links(relations: &Relations, ctx: &TransformContext<'_>) -> Element {
    let mut container = Element::new(NodeKind::RelLinks).with_attr("xlink:type", "extended");
    for (slot, target) in relations.slots() {
        let mut link = Element::new(NodeKind::DocumentLink)
            .with_attr("xlink:title", slot_title(slot, ctx))
            .with_attr("xlink:role", ctx.config.role(slot.name()));
        if let Some(target) = target {
            let title = ctx.host.title(target).unwrap_or_else(|| {
                warn!("no title registered for '{}', using its name", target);
                target.to_string()
            });
            link.attributes.set("xlink:href", target);
            link.children.push(
                Element::new(NodeKind::Reference)
                    .with_attr("refuri", target)
                    .with_child(Node::text(title))
                    .into(),
            );
        }
        container.children.push(link.into());
    }
    container
}

fn slot_title(slot: RelationSlot, ctx: &TransformContext<'_>) -> String {
    match slot {
        RelationSlot::Parent => PARENT_TITLE.to_string(),
        RelationSlot::Previous => ctx.host.translate(PREVIOUS_MESSAGE),
        RelationSlot::Next => ctx.host.translate(NEXT_MESSAGE),
    }
}
