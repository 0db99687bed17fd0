//! Wrapped DEK material for password-protected links
//!
//! Envelope encryption: the raw DEK bytes are themselves encrypted with a
//! password-derived KEK. The wrapped form travels in the link's `k` field
//! as `"<ciphertext-b64>.<iv-b64>"`. This type is deliberately distinct
//! from [`DekKey`]: wrapped material is safe to serialize, a live key is
//! not.

use crate::encoding;
use crate::symmetric::{decrypt, encrypt, Nonce};
use crate::{CryptoError, DekKey, Result};

/// A DEK encrypted under a KEK, plus the nonce used to wrap it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrappedKey {
    ciphertext: Vec<u8>,
    nonce: Nonce,
}

impl WrappedKey {
    /// Wrap a DEK under a KEK.
    ///
    /// When the share carries an expiry, the same AAD used for the payload
    /// is bound here too, so a tampered expiry also breaks unwrapping.
    pub fn wrap(dek: &DekKey, kek: &DekKey, aad: Option<&[u8]>) -> Result<Self> {
        let (nonce, ciphertext) = encrypt(kek, dek.as_bytes(), aad)?;
        Ok(Self { ciphertext, nonce })
    }

    /// Unwrap the DEK. Wrong KEK, tampering, and AAD mismatch all yield
    /// the undifferentiated [`CryptoError::Decryption`].
    pub fn unwrap_key(&self, kek: &DekKey, aad: Option<&[u8]>) -> Result<DekKey> {
        let raw = decrypt(kek, &self.nonce, &self.ciphertext, aad)?;
        // A wrapped key that authenticates but has the wrong length was
        // never produced by this protocol; treat it the same as tampering.
        DekKey::from_bytes(&raw).map_err(|_| CryptoError::Decryption)
    }

    /// Serialize as `"<ciphertext-b64>.<iv-b64>"`
    pub fn encode(&self) -> String {
        format!(
            "{}.{}",
            encoding::to_base64url(&self.ciphertext),
            self.nonce.to_base64url()
        )
    }

    /// Parse the `"<ciphertext-b64>.<iv-b64>"` form
    pub fn parse(s: &str) -> Result<Self> {
        let (ct_part, iv_part) = s.split_once('.').ok_or_else(|| {
            CryptoError::InvalidWrappedKey("expected '<ciphertext>.<iv>'".to_string())
        })?;
        let ciphertext = encoding::from_base64_any(ct_part)
            .map_err(|e| CryptoError::InvalidWrappedKey(e.to_string()))?;
        let nonce_bytes = encoding::from_base64_any(iv_part)
            .map_err(|e| CryptoError::InvalidWrappedKey(e.to_string()))?;
        let nonce = Nonce::from_bytes(&nonce_bytes)
            .map_err(|e| CryptoError::InvalidWrappedKey(e.to_string()))?;
        Ok(Self { ciphertext, nonce })
    }
}

impl std::fmt::Display for WrappedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_unwrap_roundtrip() {
        let dek = DekKey::generate();
        let kek = DekKey::generate();

        let wrapped = WrappedKey::wrap(&dek, &kek, None).unwrap();
        let unwrapped = wrapped.unwrap_key(&kek, None).unwrap();

        assert_eq!(dek.as_bytes(), unwrapped.as_bytes());
    }

    #[test]
    fn test_wrong_kek_fails() {
        let dek = DekKey::generate();
        let wrapped = WrappedKey::wrap(&dek, &DekKey::generate(), None).unwrap();

        let result = wrapped.unwrap_key(&DekKey::generate(), None);
        assert!(matches!(result, Err(CryptoError::Decryption)));
    }

    #[test]
    fn test_aad_bound_wrapping() {
        let dek = DekKey::generate();
        let kek = DekKey::generate();
        let wrapped = WrappedKey::wrap(&dek, &kek, Some(b"2026-12-31")).unwrap();

        assert!(wrapped.unwrap_key(&kek, Some(b"2026-12-31")).is_ok());
        assert!(matches!(
            wrapped.unwrap_key(&kek, Some(b"2027-01-01")),
            Err(CryptoError::Decryption)
        ));
    }

    #[test]
    fn test_encode_parse_roundtrip() {
        let wrapped = WrappedKey::wrap(&DekKey::generate(), &DekKey::generate(), None).unwrap();
        let parsed = WrappedKey::parse(&wrapped.encode()).unwrap();
        assert_eq!(wrapped, parsed);
    }

    #[test]
    fn test_parse_missing_separator() {
        let result = WrappedKey::parse("no-separator-here");
        assert!(matches!(result, Err(CryptoError::InvalidWrappedKey(_))));
    }

    #[test]
    fn test_parse_bad_iv_length() {
        let result = WrappedKey::parse("AAAA.AAAA");
        assert!(matches!(result, Err(CryptoError::InvalidWrappedKey(_))));
    }
}
