//! Key material for the share-link protocol
//!
//! A fresh [`DekKey`] (Data Encryption Key) is generated per share and only
//! ever leaves memory in encrypted form, inside the link itself. Password
//! protection derives a KEK from a [`Salt`] and never stores it anywhere.

use crate::encoding;
use crate::{CryptoError, Result};
use rand::rngs::OsRng;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a symmetric key in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// Size of an AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of a freshly generated KDF salt in bytes
pub const SALT_SIZE: usize = 16;

/// A Data Encryption Key (DEK) for symmetric encryption.
///
/// This is the *live* form of a key; the serialized forms are a plain
/// base64 string (unprotected links) or [`crate::WrappedKey`] material
/// (password-protected links). Keeping the two apart prevents live keys
/// from being persisted by accident.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct DekKey {
    key: [u8; KEY_SIZE],
}

impl DekKey {
    /// Generate a new random DEK
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_SIZE];
        rand::RngCore::fill_bytes(&mut OsRng, &mut key);
        Self { key }
    }

    /// Create a DEK from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKey(format!(
                "DEK must be {} bytes, got {}",
                KEY_SIZE,
                bytes.len()
            )));
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self { key })
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    /// Encode as base64url for link embedding
    pub fn to_base64url(&self) -> String {
        encoding::to_base64url(&self.key)
    }

    /// Decode from base64 or base64url (legacy links used the standard
    /// alphabet)
    pub fn from_base64(s: &str) -> Result<Self> {
        let bytes = encoding::from_base64_any(s)?;
        Self::from_bytes(&bytes)
    }
}

impl std::fmt::Debug for DekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material
        write!(f, "DekKey(..)")
    }
}

/// A KDF salt, embedded in password-protected links.
///
/// Public, non-secret. Freshly generated salts are [`SALT_SIZE`] bytes;
/// parsing accepts whatever length a legacy link carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Salt {
    bytes: Vec<u8>,
}

impl Salt {
    /// Generate a new random salt
    pub fn random() -> Self {
        let mut bytes = vec![0u8; SALT_SIZE];
        rand::RngCore::fill_bytes(&mut OsRng, &mut bytes);
        Self { bytes }
    }

    /// Create a salt from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the salt bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encode as base64url for link embedding
    pub fn to_base64url(&self) -> String {
        encoding::to_base64url(&self.bytes)
    }

    /// Decode from base64 or base64url
    pub fn from_base64(s: &str) -> Result<Self> {
        Ok(Self {
            bytes: encoding::from_base64_any(s)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dek_generation() {
        let dek1 = DekKey::generate();
        let dek2 = DekKey::generate();
        assert_ne!(dek1.as_bytes(), dek2.as_bytes());
    }

    #[test]
    fn test_dek_base64_roundtrip() {
        let dek = DekKey::generate();
        let encoded = dek.to_base64url();
        let decoded = DekKey::from_base64(&encoded).unwrap();
        assert_eq!(dek.as_bytes(), decoded.as_bytes());
    }

    #[test]
    fn test_dek_wrong_length() {
        let result = DekKey::from_bytes(&[0u8; 16]);
        assert!(matches!(result, Err(CryptoError::InvalidKey(_))));
    }

    #[test]
    fn test_dek_debug_hides_key() {
        let dek = DekKey::generate();
        assert_eq!(format!("{:?}", dek), "DekKey(..)");
    }

    #[test]
    fn test_salt_generation() {
        let s1 = Salt::random();
        let s2 = Salt::random();
        assert_eq!(s1.as_bytes().len(), SALT_SIZE);
        assert_ne!(s1, s2);
    }

    #[test]
    fn test_salt_base64_roundtrip() {
        let salt = Salt::random();
        let decoded = Salt::from_base64(&salt.to_base64url()).unwrap();
        assert_eq!(salt, decoded);
    }
}
