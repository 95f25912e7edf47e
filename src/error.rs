//! Error types for catalog loading and validation.
//!
//! The formatting path itself is total and never fails; errors only arise
//! while a catalog is being loaded or its descriptors constructed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading or validating a format catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Catalog JSON could not be parsed into descriptor records
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Template substitution points disagree with the declared length
    #[error(
        "template '{template}' has {found} substitution point(s) but declares length {expected}"
    )]
    PlaceholderMismatch {
        template: String,
        expected: usize,
        found: usize,
    },

    /// Shape rule derived from a template failed to compile
    #[error("invalid shape rule for template '{template}': {source}")]
    Shape {
        template: String,
        #[source]
        source: regex::Error,
    },
}
