//! Error types for the sealink-crypto crate

use thiserror::Error;

/// Result type alias using `CryptoError`
pub type Result<T> = std::result::Result<T, CryptoError>;

/// Errors that can occur during cryptographic operations
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Encryption failed
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Authentication or integrity failure. Carries no detail on purpose:
    /// wrong key, tampered ciphertext, and mismatched AAD must stay
    /// indistinguishable to callers.
    #[error("decryption failed")]
    Decryption,

    /// Invalid key format or length
    #[error("invalid key: {0}")]
    InvalidKey(String),

    /// Invalid nonce
    #[error("invalid nonce: {0}")]
    InvalidNonce(String),

    /// Invalid salt
    #[error("invalid salt: {0}")]
    InvalidSalt(String),

    /// Password-based key derivation failed or was misconfigured
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Wrapped key material is malformed
    #[error("invalid wrapped key: {0}")]
    InvalidWrappedKey(String),

    /// Base64 decode error
    #[error("base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}
