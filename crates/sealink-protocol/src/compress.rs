//! Lossless compression for simple-mode payloads
//!
//! Simple mode embeds the whole payload in the URL, so it gets a deflate
//! pass before encryption to stretch the size cap. Indirect modes skip it.

use crate::ShareError;
use flate2::read::{DeflateDecoder, DeflateEncoder};
use flate2::Compression;
use std::io::Read;

/// Deflate-compress a payload
pub fn compress(data: &[u8]) -> Result<Vec<u8>, ShareError> {
    let mut encoder = DeflateEncoder::new(data, Compression::default());
    let mut out = Vec::new();
    encoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Reverse the deflate pass.
///
/// Only reachable after the ciphertext authenticated, so a failure here
/// means the link embedded something that was never a compressed payload.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>, ShareError> {
    let mut decoder = DeflateDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|_| ShareError::InvalidLink("malformed compressed payload".to_string()))?;
    Ok(out)
}
