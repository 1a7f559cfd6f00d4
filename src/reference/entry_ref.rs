use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{RefError, RefResult};

use super::flags::ReferenceFlags;

/// Extension marking an entry as a compiled class rather than source text
pub const COMPILED_CLASS_EXTENSION: &str = "class";

/// Scheme of a normalized archive entry reference
pub(crate) const KLS_SCHEME: &str = "kls";

/// Scheme of a plain file identifier, normalized into an equivalent kls form
pub(crate) const FILE_SCHEME: &str = "file";

/// An immutable reference to a file or to an entry inside a packaged archive.
///
/// A reference is a parsed `kls:` identifier: a base locator of the form
/// `<nested-scheme>:<path>[!<inner-path>]` plus a set of typed flags. The
/// base locator never contains the `?` flag separator; flags are stripped
/// during parsing and re-appended on serialization.
///
/// References are pure values. Transform operations return new, independent
/// references, so sharing one across threads needs no synchronization.
///
/// ## Example
///
/// ```
/// use klsref::ArchiveEntryRef;
///
/// let reference = ArchiveEntryRef::parse("kls:file:///repo/lib.jar!/com/Foo.class")?
///     .expect("kls scheme is always applicable");
///
/// assert_eq!(reference.archive_path()?.to_str(), Some("/repo/lib.jar"));
/// assert_eq!(reference.inner_entry_path(), Some("/com/Foo.class"));
/// assert!(reference.is_compiled());
/// # Ok::<(), klsref::RefError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArchiveEntryRef {
    /// Base locator, always without its flag suffix
    base: String,
    /// Recognized flags parsed from the identifier's query part
    flags: ReferenceFlags,
}

impl ArchiveEntryRef {
    pub(crate) fn from_parts(base: String, flags: ReferenceFlags) -> Self {
        Self { base, flags }
    }

    /// The base locator `<nested-scheme>:<path>[!<inner-path>]`.
    pub fn base_locator(&self) -> &str {
        &self.base
    }

    /// The typed flag set carried by this reference.
    pub fn flags(&self) -> ReferenceFlags {
        self.flags
    }

    /// Whether the reference asks for the source artifact over the compiled
    /// form. Defaults to `false` when the flag is absent.
    pub fn prefers_source(&self) -> bool {
        self.flags.source
    }

    /// The last path segment of the base locator.
    pub fn file_name(&self) -> &str {
        self.base.rsplit('/').next().unwrap_or(&self.base)
    }

    /// The substring after the last `.` of the file name, or `None` when
    /// the file name contains no `.` at all.
    pub fn file_extension(&self) -> Option<&str> {
        self.file_name().rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Whether the referenced entry is a compiled class.
    pub fn is_compiled(&self) -> bool {
        self.file_extension() == Some(COMPILED_CLASS_EXTENSION)
    }

    /// The part of the base locator before the first `!`, or the whole
    /// locator when there is no `!`.
    fn archive_locator(&self) -> &str {
        self.base
            .split_once('!')
            .map_or(self.base.as_str(), |(archive, _)| archive)
    }

    /// Filesystem location of the containing archive.
    ///
    /// The archive portion of the base locator is a nested file URL; this
    /// converts it to a local path. A reference without a `!` separator
    /// addresses a file directly and resolves to that file's path.
    pub fn archive_path(&self) -> RefResult<PathBuf> {
        let locator = self.archive_locator();
        let url = Url::parse(locator).map_err(|err| RefError::Malformed {
            input: locator.to_string(),
            message: err.to_string(),
        })?;
        url.to_file_path().map_err(|()| RefError::Malformed {
            input: locator.to_string(),
            message: "not a local file URL".to_string(),
        })
    }

    /// Path of the referenced member within the archive: the text after the
    /// first `!` of the base locator, up to the next `!` if any. `None` when
    /// the reference addresses a file directly.
    pub fn inner_entry_path(&self) -> Option<&str> {
        let (_, rest) = self.base.split_once('!')?;
        rest.split('!').next()
    }

    /// Returns a copy with the archive-path portion replaced, keeping the
    /// inner entry path (if any) and all flags.
    pub fn with_archive_path(&self, new_path: &Path) -> RefResult<Self> {
        let url = Url::from_file_path(new_path).map_err(|()| RefError::Malformed {
            input: new_path.display().to_string(),
            message: "cannot form a file URL from this path".to_string(),
        })?;

        let base = match self.base.split_once('!') {
            Some((_, rest)) => format!("{url}!{rest}"),
            None => url.to_string(),
        };

        Ok(Self {
            base,
            flags: self.flags,
        })
    }

    /// Returns a copy with the extension of the final path segment replaced
    /// (or appended, when the segment has none), keeping directory, base
    /// name, and flags.
    pub fn with_file_extension(&self, extension: &str) -> Self {
        let name_start = self.base.rfind('/').map_or(0, |i| i + 1);
        let (dir, name) = self.base.split_at(name_start);
        let stem = name.rsplit_once('.').map_or(name, |(stem, _)| stem);

        Self {
            base: format!("{dir}{stem}.{extension}"),
            flags: self.flags,
        }
    }

    /// Returns a copy with the `source` flag set to the given value, all
    /// else unchanged.
    pub fn with_source_flag(&self, value: bool) -> Self {
        let mut flags = self.flags;
        flags.source = value;

        Self {
            base: self.base.clone(),
            flags,
        }
    }

    /// The canonical string form: `kls:` + base locator + the rendered flag
    /// suffix. Feeding this back through [`ArchiveEntryRef::parse`] yields
    /// an equal reference.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ArchiveEntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{KLS_SCHEME}:{}", self.base)?;
        if let Some(flag_string) = self.flags.to_flag_string() {
            write!(f, "?{flag_string}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const CLASS_REF: &str = "kls:file:///repo/lib.jar!/com/Foo.class";

    fn parse(input: &str) -> ArchiveEntryRef {
        ArchiveEntryRef::parse(input)
            .expect("valid identifier")
            .expect("applicable scheme")
    }

    #[test]
    fn test_archive_and_inner_entry_paths() {
        let reference = parse(CLASS_REF);
        assert_eq!(reference.archive_path().unwrap(), Path::new("/repo/lib.jar"));
        assert_eq!(reference.inner_entry_path(), Some("/com/Foo.class"));
    }

    #[test]
    fn test_first_bang_is_the_boundary() {
        let reference = parse("kls:file:///repo/lib.jar!/a!b/Foo.kt");
        assert_eq!(reference.archive_path().unwrap(), Path::new("/repo/lib.jar"));
        assert_eq!(reference.inner_entry_path(), Some("/a"));
    }

    #[test]
    fn test_reference_without_inner_entry() {
        let reference = parse("kls:file:///repo/Foo.kt");
        assert_eq!(reference.archive_path().unwrap(), Path::new("/repo/Foo.kt"));
        assert_eq!(reference.inner_entry_path(), None);
        assert_eq!(reference.file_name(), "Foo.kt");
    }

    #[test]
    fn test_file_name_and_extension() {
        let reference = parse(CLASS_REF);
        assert_eq!(reference.file_name(), "Foo.class");
        assert_eq!(reference.file_extension(), Some("class"));
    }

    #[test]
    fn test_extension_absent_without_dot() {
        let reference = parse("kls:file:///repo/lib.jar!/META-INF/MANIFEST");
        assert_eq!(reference.file_extension(), None);
        assert!(!reference.is_compiled());
    }

    #[test]
    fn test_is_compiled_only_for_class_entries() {
        assert!(parse(CLASS_REF).is_compiled());
        assert!(!parse("kls:file:///repo/lib.jar!/com/Foo.kt").is_compiled());
        assert!(!parse("kls:file:///repo/lib.jar!/com/Foo.java").is_compiled());
    }

    #[test]
    fn test_with_archive_path_keeps_inner_entry_and_flags() {
        let reference = parse("kls:file:///repo/lib.jar!/com/Foo.class?source=true");
        let moved = reference.with_archive_path(Path::new("/cache/lib-1.2.jar")).unwrap();

        assert_eq!(moved.archive_path().unwrap(), Path::new("/cache/lib-1.2.jar"));
        assert_eq!(moved.inner_entry_path(), Some("/com/Foo.class"));
        assert!(moved.prefers_source());
        // original untouched
        assert_eq!(reference.archive_path().unwrap(), Path::new("/repo/lib.jar"));
    }

    #[test]
    fn test_with_file_extension_replaces_final_segment_only() {
        let reference = parse("kls:file:///repo/v1.2/lib.jar!/com/Foo.class");
        let source = reference.with_file_extension("kt");

        assert_eq!(source.file_name(), "Foo.kt");
        assert_eq!(
            source.base_locator(),
            "file:///repo/v1.2/lib.jar!/com/Foo.kt"
        );
    }

    #[test]
    fn test_with_file_extension_appends_when_missing() {
        let reference = parse("kls:file:///repo/lib.jar!/com/Foo");
        assert_eq!(reference.with_file_extension("kt").file_name(), "Foo.kt");
    }

    #[test]
    fn test_with_source_flag_is_a_pure_copy() {
        let reference = parse(CLASS_REF);
        let with_source = reference.with_source_flag(true);

        assert!(with_source.to_canonical_string().ends_with("?source=true"));
        assert!(!reference.prefers_source());
        assert_eq!(reference.to_canonical_string(), CLASS_REF);
    }

    #[test]
    fn test_canonical_string_round_trip() {
        for input in [
            CLASS_REF,
            "kls:file:///repo/lib.jar!/com/Foo.class?source=true",
            "kls:file:///repo/Foo.kt",
        ] {
            let reference = parse(input);
            let round_tripped = parse(&reference.to_canonical_string());
            assert_eq!(round_tripped, reference);
        }
    }
}
