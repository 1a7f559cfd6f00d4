/// Typed flags carried in a reference's query part.
///
/// The flag set is closed: parsing recognizes exactly the fields of this
/// struct and silently drops everything else. Absent flags take their
/// documented defaults, so two references differing only in an explicit
/// default value compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReferenceFlags {
    /// Prefer the source artifact over the compiled form (default: false)
    pub source: bool,
}

impl ReferenceFlags {
    /// Parse a flag string of the form `key=value&key=value`.
    ///
    /// Tokens without exactly one `=`, tokens with an unrecognized key, and
    /// tokens whose value fails the flag's typed parser are all discarded.
    /// This leniency is deliberate: a malformed flag never fails parsing.
    pub(crate) fn from_flag_string(flag_string: &str) -> Self {
        let mut flags = Self::default();

        for token in flag_string.split('&') {
            let parts: Vec<&str> = token.split('=').collect();
            if parts.len() != 2 {
                continue;
            }
            match parts[0] {
                "source" => {
                    if let Ok(value) = parts[1].parse() {
                        flags.source = value;
                    }
                }
                // Unrecognized flags are dropped, never stored
                _ => {}
            }
        }

        flags
    }

    /// Render the non-default flags as a query suffix, `&`-joined.
    ///
    /// Returns `None` when every flag holds its default, so serialization
    /// omits the `?` separator entirely.
    pub(crate) fn to_flag_string(self) -> Option<String> {
        let mut pairs: Vec<String> = Vec::new();

        if self.source {
            pairs.push(format!("source={}", self.source));
        }

        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_flag() {
        let flags = ReferenceFlags::from_flag_string("source=true");
        assert!(flags.source);
    }

    #[test]
    fn test_source_defaults_to_false() {
        assert!(!ReferenceFlags::from_flag_string("").source);
        assert!(!ReferenceFlags::default().source);
    }

    #[test]
    fn test_unrecognized_flags_are_dropped() {
        let flags = ReferenceFlags::from_flag_string("color=red&source=true&x=1");
        assert!(flags.source);
    }

    #[test]
    fn test_malformed_tokens_are_dropped() {
        // no '=', too many '=', unparseable bool: none of these fail
        let flags = ReferenceFlags::from_flag_string("source&source=a=b&source=yes");
        assert!(!flags.source);

        let flags = ReferenceFlags::from_flag_string("junk&source=true");
        assert!(flags.source);
    }

    #[test]
    fn test_explicit_false_equals_default() {
        let flags = ReferenceFlags::from_flag_string("source=false");
        assert_eq!(flags, ReferenceFlags::default());
        assert_eq!(flags.to_flag_string(), None);
    }

    #[test]
    fn test_render_joins_with_ampersand() {
        let flags = ReferenceFlags { source: true };
        let rendered = flags.to_flag_string().unwrap();
        assert_eq!(rendered, "source=true");
        // every pair must parse back on its own after an '&' split
        for pair in rendered.split('&') {
            assert_eq!(pair.split('=').count(), 2);
        }
    }
}
