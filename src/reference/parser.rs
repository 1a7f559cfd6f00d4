//! Scheme normalization and structured parsing of identifiers.
//!
//! Parsing is a two-step pipeline:
//!
//! 1. The scheme normalizer decides whether a generic identifier can
//!    represent an archive entry reference at all. A `kls:` identifier
//!    wraps its remainder unchanged; a plain `file:` identifier wraps the
//!    whole identifier; any other scheme yields `None` — a normal negative
//!    result, never an error.
//! 2. The structured parser splits the wrapped identifier once on the first
//!    `?` into the base locator and the flag string, and hands the flag
//!    string to [`ReferenceFlags`](super::ReferenceFlags).
//!
//! Only the identifier's own syntax can fail parsing; malformed or unknown
//! flag tokens are dropped silently.

use url::Url;

use crate::error::{RefError, RefResult};

use super::entry_ref::{ArchiveEntryRef, FILE_SCHEME, KLS_SCHEME};
use super::flags::ReferenceFlags;

impl ArchiveEntryRef {
    /// Parse a generic identifier string into a reference.
    ///
    /// Returns `Ok(None)` when the identifier carries a scheme other than
    /// `kls` or `file` — it does not address an archive entry, and callers
    /// should fall back to other handling. Returns
    /// [`RefError::Malformed`] only when the identifier is not valid URI
    /// syntax at all.
    pub fn parse(input: &str) -> RefResult<Option<Self>> {
        let url = Url::parse(input).map_err(|err| RefError::Malformed {
            input: input.to_string(),
            message: err.to_string(),
        })?;
        Ok(Self::from_url(&url))
    }

    /// Normalize an already-parsed URL into a reference.
    ///
    /// Infallible once the URL exists: the only negative outcome is a
    /// non-applicable scheme, reported as `None`.
    pub fn from_url(url: &Url) -> Option<Self> {
        let identifier = url.as_str();

        let wrapped = match url.scheme() {
            KLS_SCHEME => &identifier[KLS_SCHEME.len() + 1..],
            FILE_SCHEME => identifier,
            _ => return None,
        };

        // The grammar has no fragment part
        let wrapped = wrapped.split_once('#').map_or(wrapped, |(left, _)| left);

        let (base, flag_string) = wrapped.split_once('?').unwrap_or((wrapped, ""));

        Some(Self::from_parts(
            base.to_string(),
            ReferenceFlags::from_flag_string(flag_string),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kls_scheme_wraps_remainder() {
        let reference = ArchiveEntryRef::parse("kls:file:///repo/lib.jar!/com/Foo.class")
            .unwrap()
            .unwrap();
        assert_eq!(
            reference.base_locator(),
            "file:///repo/lib.jar!/com/Foo.class"
        );
    }

    #[test]
    fn test_file_scheme_wraps_whole_identifier() {
        let reference = ArchiveEntryRef::parse("file:///repo/lib.jar")
            .unwrap()
            .unwrap();
        assert_eq!(reference.base_locator(), "file:///repo/lib.jar");
        assert_eq!(
            reference.to_canonical_string(),
            "kls:file:///repo/lib.jar"
        );
    }

    #[test]
    fn test_foreign_scheme_is_not_applicable() {
        assert!(ArchiveEntryRef::parse("http://example.com").unwrap().is_none());
        assert!(ArchiveEntryRef::parse("jdt://contents/rt.jar").unwrap().is_none());
    }

    #[test]
    fn test_invalid_syntax_is_malformed() {
        let err = ArchiveEntryRef::parse("not a uri").unwrap_err();
        assert!(matches!(err, RefError::Malformed { .. }));
    }

    #[test]
    fn test_flag_suffix_is_stripped_from_base() {
        let reference = ArchiveEntryRef::parse("kls:file:///a.jar!/Foo.class?source=true")
            .unwrap()
            .unwrap();
        assert!(!reference.base_locator().contains('?'));
        assert!(reference.prefers_source());
    }

    #[test]
    fn test_from_url_matches_parse() {
        let url = Url::parse("kls:file:///a.jar!/Foo.class?source=true").unwrap();
        let via_url = ArchiveEntryRef::from_url(&url).unwrap();
        let via_str = ArchiveEntryRef::parse(url.as_str()).unwrap().unwrap();
        assert_eq!(via_url, via_str);
    }
}
