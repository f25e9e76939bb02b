use super::{Transform, TransformContext};
use crate::error::Result;
use crate::tree::{Document, SOURCE_ATTR};

pub(crate) const XMLNS_XLINK: &str = "xmlns:xlink";

/// Declares the xlink namespace on the document root.
pub struct AddXlinkNamespace;

impl Transform for AddXlinkNamespace {
    fn name(&self) -> &'static str {
        "xlink-namespace"
    }

    fn priority(&self) -> u32 {
        900
    }

    fn apply(&self, document: &mut Document, ctx: &TransformContext<'_>) -> Result<()> {
        document
            .attributes
            .set(XMLNS_XLINK, ctx.config.xlink_namespace.as_str());
        Ok(())
    }
}

/// Strips the internal source path from the document root.
///
/// Must run after every pass that reads `source`.
pub struct RemoveSourceAttribute;

impl Transform for RemoveSourceAttribute {
    fn name(&self) -> &'static str {
        "remove-source-attribute"
    }

    fn priority(&self) -> u32 {
        901
    }

    fn apply(&self, document: &mut Document, _ctx: &TransformContext<'_>) -> Result<()> {
        document.attributes.remove(SOURCE_ATTR);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LinksConfig;
    use crate::testing::MemoryHost;

    #[test]
    fn test_namespace_and_source_passes() {
        let host = MemoryHost::new("/src");
        let config = LinksConfig::default();
        let ctx = TransformContext {
            host: &host,
            config: &config,
        };
        let mut doc = host.document("index", vec![]);
        assert!(doc.source().is_some());

        AddXlinkNamespace.apply(&mut doc, &ctx).unwrap();
        RemoveSourceAttribute.apply(&mut doc, &ctx).unwrap();

        assert_eq!(
            doc.attributes.get_str(XMLNS_XLINK),
            Some("http://www.w3.org/1999/xlink")
        );
        assert_eq!(doc.source(), None);

        // Idempotent when the attribute is already gone.
        RemoveSourceAttribute.apply(&mut doc, &ctx).unwrap();
        assert_eq!(doc.attributes.len(), 1);
    }
}
