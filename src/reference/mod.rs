//! Archive entry reference parsing and manipulation.
//!
//! This module implements the `kls:` identifier that addresses a file or an
//! entry inside a packaged archive as a single plain string.
//!
//! ## Architecture
//!
//! The module is organized into three components:
//!
//! - [`entry_ref`]: The [`ArchiveEntryRef`] immutable value with its derived
//!   accessors, transform operations, and canonical serialization
//! - [`flags`]: The typed flag set carried in the identifier's query part
//! - [`parser`]: Scheme normalization and structured parsing of identifiers
//!
//! ## Identifier grammar
//!
//! ```text
//! reference    := scheme ":" base-locator ["?" flag-string]
//! scheme       := "kls" | "file"        ; "file" normalizes to a kls form
//! base-locator := path ["!" inner-path]
//! flag-string  := flag ("&" flag)*
//! flag         := flag-name "=" flag-value
//! ```
//!
//! The part of the base locator before the first `!` is a nested file URL
//! naming the archive on disk; the part after it is the path of a member
//! within that archive. A locator without `!` addresses a file directly.

mod entry_ref;
mod flags;
mod parser;

pub use entry_ref::{ArchiveEntryRef, COMPILED_CLASS_EXTENSION};
pub use flags::ReferenceFlags;
