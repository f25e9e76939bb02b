use super::{Transform, TransformContext};
use crate::error::Result;
use crate::tree::{AttrValue, Document, NodeKind};

pub(super) const ENTRIES_ATTR: &str = "entries";

/// Replaces the structured `entries` of every index node with its JSON form,
/// so output consumers see one opaque string instead of nested data.
pub struct IndexEntriesTransform;

impl Transform for IndexEntriesTransform {
    fn name(&self) -> &'static str {
        "index-entries"
    }

    fn priority(&self) -> u32 {
        900
    }

    fn apply(&self, document: &mut Document, _ctx: &TransformContext<'_>) -> Result<()> {
        document.try_for_each_element_mut(|element| {
            if element.kind != NodeKind::Index {
                return Ok(());
            }
            if let Some(AttrValue::Entries(entries)) = element.attributes.get(ENTRIES_ATTR) {
                let json = serde_json::to_string(entries)?;
                element.attributes.set(ENTRIES_ATTR, json);
            }
            Ok(())
        })
    }
}
