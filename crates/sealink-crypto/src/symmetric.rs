//! Authenticated encryption using AES-256-GCM
//!
//! Every encryption call draws a fresh random nonce; a nonce is never
//! reused under the same key. When a share carries an expiry date, the
//! date string is bound as AAD into every ciphertext of that share.

use crate::encoding;
use crate::keys::{DekKey, KEY_SIZE, NONCE_SIZE};
use crate::{CryptoError, Result};
use aes_gcm::{aead::Aead as AeadTrait, Aes256Gcm, KeyInit};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

/// A nonce (IV) for AEAD encryption
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nonce {
    bytes: [u8; NONCE_SIZE],
}

impl Nonce {
    /// Generate a random nonce
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_SIZE];
        rand::RngCore::fill_bytes(&mut OsRng, &mut bytes);
        Self { bytes }
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != NONCE_SIZE {
            return Err(CryptoError::InvalidNonce(format!(
                "nonce must be {} bytes, got {}",
                NONCE_SIZE,
                bytes.len()
            )));
        }
        let mut arr = [0u8; NONCE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Get the nonce bytes
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.bytes
    }

    /// Encode as base64url for link embedding
    pub fn to_base64url(&self) -> String {
        encoding::to_base64url(&self.bytes)
    }

    /// Decode from base64 or base64url
    pub fn from_base64(s: &str) -> Result<Self> {
        let bytes = encoding::from_base64_any(s)?;
        Self::from_bytes(&bytes)
    }
}

/// AES-256-GCM encryption/decryption interface
pub struct Aead {
    key: [u8; KEY_SIZE],
}

impl Aead {
    /// Create a new AEAD instance with the given key
    pub fn new(key: &DekKey) -> Self {
        Self {
            key: *key.as_bytes(),
        }
    }

    /// Encrypt plaintext with the given nonce and optional AAD
    pub fn encrypt(&self, nonce: &Nonce, plaintext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new_from_slice(&self.key)
            .map_err(|e| CryptoError::Encryption(e.to_string()))?;
        let nonce_arr = aes_gcm::Nonce::from_slice(nonce.as_bytes());

        let result = match aad {
            Some(aad) => cipher.encrypt(
                nonce_arr,
                aes_gcm::aead::Payload {
                    msg: plaintext,
                    aad,
                },
            ),
            None => cipher.encrypt(nonce_arr, plaintext),
        };
        result.map_err(|e| CryptoError::Encryption(e.to_string()))
    }

    /// Decrypt ciphertext with the given nonce and optional AAD.
    ///
    /// Any failure maps to the undifferentiated [`CryptoError::Decryption`].
    pub fn decrypt(&self, nonce: &Nonce, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
        let cipher =
            Aes256Gcm::new_from_slice(&self.key).map_err(|_| CryptoError::Decryption)?;
        let nonce_arr = aes_gcm::Nonce::from_slice(nonce.as_bytes());

        let result = match aad {
            Some(aad) => cipher.decrypt(
                nonce_arr,
                aes_gcm::aead::Payload {
                    msg: ciphertext,
                    aad,
                },
            ),
            None => cipher.decrypt(nonce_arr, ciphertext),
        };
        result.map_err(|_| CryptoError::Decryption)
    }
}

/// Encrypt with a freshly generated nonce (convenience function)
pub fn encrypt(key: &DekKey, plaintext: &[u8], aad: Option<&[u8]>) -> Result<(Nonce, Vec<u8>)> {
    let nonce = Nonce::generate();
    let ciphertext = Aead::new(key).encrypt(&nonce, plaintext, aad)?;
    Ok((nonce, ciphertext))
}

/// Decrypt (convenience function)
pub fn decrypt(key: &DekKey, nonce: &Nonce, ciphertext: &[u8], aad: Option<&[u8]>) -> Result<Vec<u8>> {
    Aead::new(key).decrypt(nonce, ciphertext, aad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let key = DekKey::generate();
        let plaintext = b"Hello, World!";

        let (nonce, ciphertext) = encrypt(&key, plaintext, None).unwrap();
        let decrypted = decrypt(&key, &nonce, &ciphertext, None).unwrap();

        assert_eq!(plaintext.as_slice(), decrypted.as_slice());
    }

    #[test]
    fn test_roundtrip_with_aad() {
        let key = DekKey::generate();
        let aad = b"2026-12-31";

        let (nonce, ciphertext) = encrypt(&key, b"secret data", Some(aad)).unwrap();
        let decrypted = decrypt(&key, &nonce, &ciphertext, Some(aad)).unwrap();

        assert_eq!(b"secret data".as_slice(), decrypted.as_slice());
    }

    #[test]
    fn test_wrong_aad_fails() {
        let key = DekKey::generate();
        let (nonce, ciphertext) = encrypt(&key, b"secret data", Some(b"2026-12-31")).unwrap();

        let result = decrypt(&key, &nonce, &ciphertext, Some(b"2027-01-01"));
        assert!(matches!(result, Err(CryptoError::Decryption)));
    }

    #[test]
    fn test_missing_aad_fails() {
        let key = DekKey::generate();
        let (nonce, ciphertext) = encrypt(&key, b"secret data", Some(b"2026-12-31")).unwrap();

        let result = decrypt(&key, &nonce, &ciphertext, None);
        assert!(matches!(result, Err(CryptoError::Decryption)));
    }

    #[test]
    fn test_wrong_key_fails() {
        let (nonce, ciphertext) = encrypt(&DekKey::generate(), b"data", None).unwrap();

        let result = decrypt(&DekKey::generate(), &nonce, &ciphertext, None);
        assert!(matches!(result, Err(CryptoError::Decryption)));
    }

    #[test]
    fn test_tampered_ciphertext_fails() {
        let key = DekKey::generate();
        let (nonce, mut ciphertext) = encrypt(&key, b"data", None).unwrap();
        ciphertext[0] ^= 0x01;

        let result = decrypt(&key, &nonce, &ciphertext, None);
        assert!(matches!(result, Err(CryptoError::Decryption)));
    }

    #[test]
    fn test_nonce_wrong_length() {
        assert!(Nonce::from_bytes(&[0u8; 8]).is_err());
    }

    #[test]
    fn test_nonce_base64_roundtrip() {
        let nonce = Nonce::generate();
        let decoded = Nonce::from_base64(&nonce.to_base64url()).unwrap();
        assert_eq!(nonce, decoded);
    }
}
