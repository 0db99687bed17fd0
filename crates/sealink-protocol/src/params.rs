//! URL codec for share links
//!
//! Canonical links keep key material in the fragment, which browsers never
//! send to any server:
//!
//! ```text
//! <base-url>?p=<encrypted-indirection-id>#k=<key>&i=<iv>&m=<s|c|d>&s=<salt>&x=<YYYY-MM-DD>
//! ```
//!
//! Simple mode uses `?data=` instead of `?p=` and embeds the sealed payload
//! itself. Several historical dialects used long field names
//! (`key`/`iv`/`mode`/`salt`/`expdate`/`epayload`) and full-word modes;
//! one parser with ordered fallback keys per field covers them all.

use crate::{ShareError, ShareMode};
use chrono::NaiveDate;

/// Date format used in the `x` field and as ciphertext AAD
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Key material as it appears in a link's `k` field.
///
/// A plain key is the base64 of the raw DEK; wrapped material is the
/// `"<ciphertext>.<iv>"` form produced by password protection. The two are
/// kept apart so wrapped material is never mistaken for a live key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyMaterial {
    /// base64-encoded raw DEK
    Plain(String),
    /// Wrapped-DEK string, `"<ciphertext-b64>.<iv-b64>"`
    Wrapped(String),
}

impl KeyMaterial {
    /// The string form embedded in the link
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(s) | Self::Wrapped(s) => s,
        }
    }
}

/// The canonical decoded form of a link's crypto parameters.
///
/// Constructed at share-creation time, serialized into a URL, reconstructed
/// by parsing at receive time, then discarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLinkParams {
    /// Share mode (defaults to simple when the link carries no mode field)
    pub mode: ShareMode,
    /// DEK material, plain or password-wrapped
    pub key: KeyMaterial,
    /// base64 KDF salt, present iff the share is password-protected
    pub salt: Option<String>,
    /// Expiry date, bound as AAD into every ciphertext of the share
    pub expiry: Option<NaiveDate>,
    /// base64 nonce of the link-embedded ciphertext
    pub iv: String,
    /// base64 embedded ciphertext: the sealed payload (simple) or the
    /// encrypted indirection id (cloud/dynamic)
    pub payload: Option<String>,
}

/// Ordered fallback keys per logical field; canonical short form first
const KEY_FIELDS: [&str; 2] = ["k", "key"];
const IV_FIELDS: [&str; 2] = ["i", "iv"];
const MODE_FIELDS: [&str; 2] = ["m", "mode"];
const SALT_FIELDS: [&str; 2] = ["s", "salt"];
const EXPIRY_FIELDS: [&str; 2] = ["x", "expdate"];

impl ShareLinkParams {
    /// Serialize into a full URL under `base_url`.
    ///
    /// Fragment fields (`k`,`i`,`m`,`s`,`x`) never reach a server; only the
    /// opaque payload parameter travels in the query string.
    pub fn to_url(&self, base_url: &str) -> String {
        let payload_field = if self.mode == ShareMode::Simple {
            "data"
        } else {
            "p"
        };
        let mut url = String::from(base_url.trim_end_matches('/'));
        if let Some(payload) = &self.payload {
            url.push('?');
            url.push_str(payload_field);
            url.push('=');
            url.push_str(payload);
        }
        url.push_str("#k=");
        url.push_str(self.key.as_str());
        url.push_str("&i=");
        url.push_str(&self.iv);
        url.push_str("&m=");
        url.push_str(self.mode.as_short());
        if let Some(salt) = &self.salt {
            url.push_str("&s=");
            url.push_str(salt);
        }
        if let Some(expiry) = &self.expiry {
            url.push_str("&x=");
            url.push_str(&expiry.format(EXPIRY_FORMAT).to_string());
        }
        url
    }

    /// Parse a URL into canonical parameters.
    ///
    /// Returns `None` when the URL is not a share link at all (no key or no
    /// iv in any dialect), so callers can distinguish that from a share
    /// link with a problem, which surfaces later as [`ShareError`].
    pub fn parse(url: &str) -> Option<Self> {
        let (base, fragment) = match url.split_once('#') {
            Some((base, fragment)) => (base, fragment),
            None => (url, ""),
        };
        let query = base.split_once('?').map(|(_, q)| q).unwrap_or("");

        // Dialects have moved fields between query and fragment over time;
        // search both.
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        for part in [query, fragment] {
            for seg in part.split('&') {
                if let Some((k, v)) = seg.split_once('=') {
                    if !v.is_empty() {
                        pairs.push((k, v));
                    }
                }
            }
        }

        let key = first(&pairs, &KEY_FIELDS)?;
        let iv = first(&pairs, &IV_FIELDS)?;

        let mode = match first(&pairs, &MODE_FIELDS) {
            Some(m) => ShareMode::parse(m)?,
            None => ShareMode::default(),
        };

        let salt = first(&pairs, &SALT_FIELDS).map(str::to_string);

        let expiry = match first(&pairs, &EXPIRY_FIELDS) {
            Some(x) => Some(NaiveDate::parse_from_str(x, EXPIRY_FORMAT).ok()?),
            None => None,
        };

        // Payload resolution is mode-aware: simple prefers `data`, indirect
        // modes prefer `p`/`epayload`.
        let payload_fields: [&str; 3] = if mode == ShareMode::Simple {
            ["data", "p", "epayload"]
        } else {
            ["p", "epayload", "data"]
        };
        let payload = first(&pairs, &payload_fields).map(str::to_string);

        let key = if salt.is_some() {
            KeyMaterial::Wrapped(key.to_string())
        } else {
            KeyMaterial::Plain(key.to_string())
        };

        Some(Self {
            mode,
            key,
            salt,
            expiry,
            iv: iv.to_string(),
            payload,
        })
    }

    /// The embedded ciphertext, or an [`ShareError::InvalidLink`] naming
    /// what is missing
    pub fn require_payload(&self) -> Result<&str, ShareError> {
        self.payload
            .as_deref()
            .ok_or_else(|| ShareError::InvalidLink("missing payload parameter".to_string()))
    }
}

fn first<'a>(pairs: &[(&'a str, &'a str)], keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .find_map(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| *v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ShareLinkParams {
        ShareLinkParams {
            mode: ShareMode::Cloud,
            key: KeyMaterial::Plain("a2V5a2V5".to_string()),
            salt: None,
            expiry: NaiveDate::from_ymd_opt(2026, 12, 31),
            iv: "aXZpdml2aXZpdg".to_string(),
            payload: Some("Y2lwaGVydGV4dA".to_string()),
        }
    }

    #[test]
    fn test_url_roundtrip() {
        let params = sample();
        let url = params.to_url("https://sealink.example/view");
        let parsed = ShareLinkParams::parse(&url).unwrap();
        assert_eq!(parsed, params);
    }

    #[test]
    fn test_simple_mode_uses_data_param() {
        let params = ShareLinkParams {
            mode: ShareMode::Simple,
            ..sample()
        };
        let url = params.to_url("https://sealink.example/view");
        assert!(url.contains("?data="));
        assert_eq!(ShareLinkParams::parse(&url).unwrap(), params);
    }

    #[test]
    fn test_legacy_long_form_parses_identically() {
        let short = ShareLinkParams::parse(
            "https://x.example/v?p=Y2lwaGVydGV4dA#k=a2V5a2V5&i=aXZpdml2aXZpdg&m=c&x=2026-12-31",
        )
        .unwrap();
        let long = ShareLinkParams::parse(
            "https://x.example/v?epayload=Y2lwaGVydGV4dA#key=a2V5a2V5&iv=aXZpdml2aXZpdg&mode=cloud&expdate=2026-12-31",
        )
        .unwrap();
        assert_eq!(short, long);
    }

    #[test]
    fn test_missing_key_or_iv_is_no_match() {
        assert!(ShareLinkParams::parse("https://x.example/v?data=abc#i=aXY").is_none());
        assert!(ShareLinkParams::parse("https://x.example/v?data=abc#k=a2V5").is_none());
        assert!(ShareLinkParams::parse("https://x.example/plain-page").is_none());
    }

    #[test]
    fn test_missing_mode_defaults_to_simple() {
        let parsed =
            ShareLinkParams::parse("https://x.example/v?data=abc#k=a2V5&i=aXY").unwrap();
        assert_eq!(parsed.mode, ShareMode::Simple);
    }

    #[test]
    fn test_salt_marks_key_as_wrapped() {
        let parsed = ShareLinkParams::parse(
            "https://x.example/v?data=abc#k=Y3Q.aXY&i=aXY&s=c2FsdA",
        )
        .unwrap();
        assert!(matches!(parsed.key, KeyMaterial::Wrapped(_)));
        assert_eq!(parsed.salt.as_deref(), Some("c2FsdA"));
    }

    #[test]
    fn test_payload_preference_by_mode() {
        // Simple prefers data over p
        let simple = ShareLinkParams::parse(
            "https://x.example/v?data=RFFUQQ&p=UFBQ#k=a2V5&i=aXY&m=s",
        )
        .unwrap();
        assert_eq!(simple.payload.as_deref(), Some("RFFUQQ"));

        // Cloud prefers p over data
        let cloud = ShareLinkParams::parse(
            "https://x.example/v?data=RFFUQQ&p=UFBQ#k=a2V5&i=aXY&m=c",
        )
        .unwrap();
        assert_eq!(cloud.payload.as_deref(), Some("UFBQ"));
    }

    #[test]
    fn test_invalid_expiry_is_no_match() {
        assert!(ShareLinkParams::parse(
            "https://x.example/v?data=abc#k=a2V5&i=aXY&x=31-12-2026"
        )
        .is_none());
    }

    #[test]
    fn test_expired_date_still_parses() {
        // Expiry enforcement is the receive flow's job, not the parser's
        let parsed = ShareLinkParams::parse(
            "https://x.example/v?data=abc#k=a2V5&i=aXY&x=2001-01-01",
        )
        .unwrap();
        assert_eq!(parsed.expiry, NaiveDate::from_ymd_opt(2001, 1, 1));
    }

    #[test]
    fn test_empty_values_ignored() {
        assert!(ShareLinkParams::parse("https://x.example/v?data=abc#k=&i=aXY").is_none());
    }
}
