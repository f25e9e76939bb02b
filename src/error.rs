//! Error types for the links pipeline

use thiserror::Error;

/// Errors raised while annotating documents or writing the links document.
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A pass needed an attribute the host always sets. The build cannot go on.
    #[error("pass '{pass}' requires the '{attribute}' attribute on the document root")]
    MissingAttribute {
        pass: &'static str,
        attribute: &'static str,
    },

    #[error("toctree walk ended with {0} open node(s) on the stack")]
    UnbalancedToctree(usize),

    #[error("failed to write document '{name}': {message}")]
    Write { name: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
