//! Content access for referenced archive entries.
//!
//! The archive container format itself is delegated to the `zip` crate;
//! this module resolves a reference's inner entry, reads or extracts it,
//! and maps the primitive's failures onto the reference error taxonomy.
//!
//! Every operation acquires the archive handle as a scoped resource: the
//! handle is owned by the call frame and dropped on every exit path,
//! success or error.

mod reader;
mod temp;

pub use reader::{extract_to_temp_file, read_contents};

use std::io;
use std::path::PathBuf;

/// A caller-supplied scope that creates temporary files.
///
/// The scope owns the lifecycle of the files it creates; extraction only
/// writes into them. Implemented for [`tempfile::TempDir`], which removes
/// the whole scope on drop.
pub trait TempFileScope {
    /// Create a new empty file named after `base_name` and `extension`
    /// and return its path.
    fn create_temp_file(&self, base_name: &str, extension: &str) -> io::Result<PathBuf>;
}
