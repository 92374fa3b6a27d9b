//! Error types for kitgen-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the source directory tree.
///
/// All of these are fatal to a run: if the source or a locale directory
/// cannot be listed, no tree is built. Per-file decode failures are NOT
/// errors - the file is skipped and the run continues.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source or a locale directory could not be read.
    #[error("cannot read directory {path}: {source}")]
    ReadDir {
        /// Directory that failed to list.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A record file could not be opened or read.
    #[error("cannot read file {path}: {source}")]
    ReadFile {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

/// Errors raised while rendering the tree into artifacts.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A node's metadata could not be serialized.
    #[error("cannot render {path}: {source}")]
    Contents {
        /// Artifact path that failed to render.
        path: PathBuf,
        /// Underlying serialization error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display_names_path() {
        let err = SourceError::ReadDir {
            path: PathBuf::from("/missing/src"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/missing/src"));
    }
}
