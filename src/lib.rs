//! # klsref
//!
//! Resolve `kls:` archive-entry references to classes and sources inside
//! jar files.
//!
//! This library lets a tool address a class or source artifact that lives
//! inside a packaged archive with a single self-describing identifier
//! instead of an (archive-path, inner-path, flags) tuple. The identifier
//! round-trips through caches, editors, and navigation links as a plain
//! string.
//!
//! ## Features
//!
//! - Normalize `kls:` and `file:` identifiers; foreign schemes are a
//!   normal negative result, not an error
//! - Derive archive path, inner entry path, file name/extension, and flag
//!   values from a parsed reference
//! - Produce modified copies with a different archive path, extension, or
//!   flag value; references themselves are immutable
//! - Read an entry's text or extract its raw bytes into a caller-owned
//!   temporary-file scope
//!
//! ## Example
//!
//! ```no_run
//! use klsref::{ArchiveEntryRef, read_contents};
//!
//! fn main() -> anyhow::Result<()> {
//!     let identifier = "kls:file:///repo/lib.jar!/com/Foo.kt?source=true";
//!
//!     // Foreign schemes (http, jdt, ...) normalize to None
//!     let Some(reference) = ArchiveEntryRef::parse(identifier)? else {
//!         anyhow::bail!("not an archive entry reference");
//!     };
//!
//!     if !reference.is_compiled() {
//!         let source = read_contents(&reference)?;
//!         println!("{source}");
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod reference;

pub use archive::{TempFileScope, extract_to_temp_file, read_contents};
pub use cli::Cli;
pub use error::{RefError, RefResult};
pub use reference::{ArchiveEntryRef, COMPILED_CLASS_EXTENSION, ReferenceFlags};
