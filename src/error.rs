//! Error types for archive entry reference handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for reference operations
pub type RefResult<T> = Result<T, RefError>;

/// Errors produced while parsing references or accessing archive entries.
///
/// A scheme mismatch is deliberately *not* represented here: identifiers
/// with a foreign scheme normalize to `None`, a normal negative result,
/// so callers can fall back to other handling.
#[derive(Error, Debug)]
pub enum RefError {
    /// The identifier itself is not valid URI syntax
    #[error("malformed reference '{input}': {message}")]
    Malformed { input: String, message: String },

    /// The archive file could not be opened or is not a valid archive
    #[error("cannot open archive {path}: {source}")]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The inner entry path does not exist in the archive
    #[error("entry '{entry}' not found in archive {archive}")]
    EntryNotFound { archive: PathBuf, entry: String },

    /// The entry name has no extension segment to split on
    #[error("entry name '{name}' has no file extension")]
    InvalidEntryName { name: String },

    /// The reference addresses a plain file, not an entry inside an archive
    #[error("reference '{reference}' does not address an entry inside an archive")]
    NoInnerEntry { reference: String },

    /// Read or copy failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
