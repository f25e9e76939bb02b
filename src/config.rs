//! Configuration for the links view.
//!
//! Defaults live in `defaults/doclinks.default.toml`, embedded at compile time.
//! [`LinksConfig::default`] mirrors that file; [`Loader`] layers project files
//! and overrides over it.

use crate::error::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/doclinks.default.toml");

/// Top-level configuration consumed by [`crate::LinksExtension`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinksConfig {
    pub master_doc: String,
    pub output_name: String,
    pub xlink_namespace: String,
    pub role_base: String,
    pub aggregate: AggregateConfig,
}

impl LinksConfig {
    /// Role URI for a relation name, e.g. `parent` or `document`.
    pub fn role(&self, relation: &str) -> String {
        format!("{}{}", self.role_base, relation)
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            master_doc: "index".to_string(),
            output_name: "_links".to_string(),
            xlink_namespace: "http://www.w3.org/1999/xlink".to_string(),
            role_base: "http://heptet.us/linkprops/".to_string(),
            aggregate: AggregateConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct AggregateConfig {
    pub group_order: GroupOrder,
}

/// Order of the per-document groups in the links document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupOrder {
    /// Each group is prepended, so the last accumulated document comes first.
    #[default]
    Reversed,
    /// Groups follow the order documents finished resolving.
    Accumulation,
}

/// Builds a [`LinksConfig`] from the embedded defaults, then any project
/// files, then single-key overrides. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    layers: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            layers: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a TOML file. The file must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        let file = File::from(path.as_ref()).format(FileFormat::Toml);
        Self {
            layers: self.layers.add_source(file),
        }
    }

    /// Override one dotted key, e.g. `aggregate.group_order`.
    pub fn with_override(self, key: &str, value: impl Into<ValueKind>) -> Result<Self> {
        Ok(Self {
            layers: self.layers.set_override(key, value)?,
        })
    }

    pub fn build(self) -> Result<LinksConfig> {
        Ok(self.layers.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
