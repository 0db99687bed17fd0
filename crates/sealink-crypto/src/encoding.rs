//! base64 / base64url codecs for embedding binary data in URLs
//!
//! New links always use the URL-safe alphabet without padding so values can
//! sit in a query string or fragment untouched. Historical links were built
//! with the standard alphabet, so decoding tries every dialect.

use crate::Result;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;

/// Encode with the URL-safe alphabet, no padding
pub fn to_base64url(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64 in any of the dialects found in issued links:
/// URL-safe with or without padding, standard with or without padding.
pub fn from_base64_any(s: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(s)
        .or_else(|_| URL_SAFE.decode(s))
        .or_else(|_| STANDARD_NO_PAD.decode(s))
        .or_else(|_| STANDARD.decode(s))
        .map_err(Into::into)
}
