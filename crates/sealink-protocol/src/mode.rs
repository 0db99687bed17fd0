//! Share modes
//!
//! The mode decides both the payload transform and the storage path:
//!
//! | mode    | embedded in link            | size cap | store calls            |
//! |---------|-----------------------------|----------|------------------------|
//! | simple  | compressed payload (sealed) | yes      | none                   |
//! | cloud   | encrypted data-record id    | no       | create / read          |
//! | dynamic | encrypted pointer-record id | no       | create / read / update |

/// How a share's payload travels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShareMode {
    /// Payload compressed and embedded directly in the link
    #[default]
    Simple,
    /// Payload stored externally; link embeds the data-record id
    Cloud,
    /// Payload stored behind a mutable pointer record; link embeds the
    /// pointer id so the target can change without changing the link
    Dynamic,
}

impl ShareMode {
    /// Parse either the single-letter form or the legacy full word
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "s" | "simple" => Some(Self::Simple),
            "c" | "cloud" => Some(Self::Cloud),
            "d" | "dynamic" => Some(Self::Dynamic),
            _ => None,
        }
    }

    /// The single-letter form used in generated links
    pub fn as_short(&self) -> &'static str {
        match self {
            Self::Simple => "s",
            Self::Cloud => "c",
            Self::Dynamic => "d",
        }
    }

    /// Whether this mode hands ciphertext to a storage collaborator
    pub fn uses_store(&self) -> bool {
        !matches!(self, Self::Simple)
    }

    /// Whether the payload is compressed before encryption
    pub fn compresses_payload(&self) -> bool {
        matches!(self, Self::Simple)
    }

    /// Whether the encoded payload length is capped
    pub fn size_limited(&self) -> bool {
        matches!(self, Self::Simple)
    }
}

impl std::fmt::Display for ShareMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Simple => "simple",
            Self::Cloud => "cloud",
            Self::Dynamic => "dynamic",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_and_long() {
        for (short, long, mode) in [
            ("s", "simple", ShareMode::Simple),
            ("c", "cloud", ShareMode::Cloud),
            ("d", "dynamic", ShareMode::Dynamic),
        ] {
            assert_eq!(ShareMode::parse(short), Some(mode));
            assert_eq!(ShareMode::parse(long), Some(mode));
        }
        assert_eq!(ShareMode::parse("x"), None);
        assert_eq!(ShareMode::parse(""), None);
    }

    #[test]
    fn test_policy_table() {
        assert!(!ShareMode::Simple.uses_store());
        assert!(ShareMode::Simple.size_limited());
        assert!(ShareMode::Simple.compresses_payload());

        assert!(ShareMode::Cloud.uses_store());
        assert!(!ShareMode::Cloud.size_limited());
        assert!(!ShareMode::Cloud.compresses_payload());

        assert!(ShareMode::Dynamic.uses_store());
        assert!(!ShareMode::Dynamic.size_limited());
    }

    #[test]
    fn test_display_roundtrip() {
        for mode in [ShareMode::Simple, ShareMode::Cloud, ShareMode::Dynamic] {
            assert_eq!(ShareMode::parse(&mode.to_string()), Some(mode));
            assert_eq!(ShareMode::parse(mode.as_short()), Some(mode));
        }
    }
}
