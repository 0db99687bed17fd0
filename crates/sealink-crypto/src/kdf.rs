//! Password-based key derivation
//!
//! Derives a KEK (Key Encryption Key) from a password and salt using
//! Argon2id. The derivation is deliberately slow and memory-hard; callers
//! must run it at most once per user-facing attempt.

use crate::{CryptoError, DekKey, Result, Salt, KEY_SIZE};
use argon2::{Algorithm, Argon2, Params, Version};

/// Argon2id cost parameters.
///
/// The defaults match the parameters baked into issued links; changing them
/// breaks decryption of existing password-protected shares, so any future
/// adjustment has to ride on a new link field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of iterations
    pub time_cost: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

/// Derive a symmetric key from a password and salt.
///
/// Empty passwords and empty salts are configuration errors, rejected
/// before any work is done.
pub fn derive_key(password: &str, salt: &Salt, params: &KdfParams) -> Result<DekKey> {
    if password.is_empty() {
        return Err(CryptoError::KeyDerivation(
            "password must not be empty".to_string(),
        ));
    }
    if salt.as_bytes().is_empty() {
        return Err(CryptoError::KeyDerivation(
            "salt must not be empty".to_string(),
        ));
    }

    let argon_params = Params::new(
        params.memory_kib,
        params.time_cost,
        params.parallelism,
        Some(KEY_SIZE),
    )
    .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params);

    let mut key = [0u8; KEY_SIZE];
    argon2
        .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut key)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    DekKey::from_bytes(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_params() -> KdfParams {
        // Keep unit tests quick; the defaults are exercised by integration
        // tests that actually round-trip a password-protected link.
        KdfParams {
            memory_kib: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let salt = Salt::random();
        let k1 = derive_key("hunter2", &salt, &fast_params()).unwrap();
        let k2 = derive_key("hunter2", &salt, &fast_params()).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let k1 = derive_key("hunter2", &Salt::random(), &fast_params()).unwrap();
        let k2 = derive_key("hunter2", &Salt::random(), &fast_params()).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let salt = Salt::random();
        let k1 = derive_key("hunter2", &salt, &fast_params()).unwrap();
        let k2 = derive_key("hunter3", &salt, &fast_params()).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn test_empty_password_rejected() {
        let result = derive_key("", &Salt::random(), &fast_params());
        assert!(matches!(result, Err(CryptoError::KeyDerivation(_))));
    }

    #[test]
    fn test_empty_salt_rejected() {
        let salt = Salt::from_bytes(Vec::new());
        let result = derive_key("hunter2", &salt, &fast_params());
        assert!(matches!(result, Err(CryptoError::KeyDerivation(_))));
    }

    #[test]
    fn test_default_params() {
        let params = KdfParams::default();
        assert_eq!(params.memory_kib, 19_456);
        assert_eq!(params.time_cost, 2);
        assert_eq!(params.parallelism, 1);
    }
}
