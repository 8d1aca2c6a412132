//! Error types for mode sheet loading.

use std::path::PathBuf;

/// Error type for mode sheet loading failures.
///
/// The taxonomy is deliberately narrow: only I/O failures and
/// syntactically invalid YAML are errors. Shape problems inside a
/// structurally valid document (wrong value types, unknown keys,
/// malformed layers) are coerced to "absent" and reported as
/// [`ParseWarning`](super::ParseWarning)s instead, because resolution
/// must stay total over anything a live settings store can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// The sheet file could not be read.
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// Error message from the underlying read.
        message: String,
    },

    /// The document is not valid YAML, or its root is not a mapping.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// Refresh was requested on a sheet with no source file.
    NoSource,
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetError::Io { path, message } => {
                write!(f, "Failed to read {}: {}", path.display(), message)
            }
            SheetError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "Failed to parse mode sheet {}: {}", p.display(), message)
                } else {
                    write!(f, "Failed to parse mode sheet: {}", message)
                }
            }
            SheetError::NoSource => {
                write!(f, "Cannot refresh: mode sheet has no source file")
            }
        }
    }
}

impl std::error::Error for SheetError {}
