//! Error types for catalog loading.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed or has the wrong shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share an id.
    #[error("Duplicate background id '{id}'")]
    DuplicateId { id: String },

    /// An entry has an empty id or style token.
    #[error("Background '{id}' has an empty {field}")]
    EmptyField { id: String, field: &'static str },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
