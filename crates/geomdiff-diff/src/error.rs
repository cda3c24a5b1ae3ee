//! Error types for the diff crate.

use std::path::PathBuf;

use geomdiff_types::{ElementType, TypeError};

/// Errors that can occur during diff operations.
///
/// Applying a diff to a geometry that has drifted from the diff's source is
/// not an error: mismatched elements are skipped silently.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// The two elements have no common diff variant.
    #[error("unsupported kind: cannot diff a {from} against a {to}")]
    UnsupportedKind { from: ElementType, to: ElementType },

    /// A diff was applied to geometry of another kind.
    #[error("geometry mismatch: diff is for a {expected}, geometry belongs to a {actual}")]
    GeometryMismatch {
        expected: ElementType,
        actual: ElementType,
    },

    /// Entity model error.
    #[error("type error: {0}")]
    Type(#[from] TypeError),

    /// The configuration file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
