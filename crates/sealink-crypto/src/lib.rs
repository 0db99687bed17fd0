//! # Sealink Crypto
//!
//! Cryptographic primitives for the Sealink share-link protocol.
//!
//! This crate provides:
//! - **DEK management**: Random 256-bit data encryption keys, zeroized on drop
//! - **AES-256-GCM**: Authenticated encryption with optional AAD binding
//! - **Argon2id**: Slow, memory-hard password-to-key derivation
//! - **Key wrapping**: DEKs sealed under a password-derived KEK
//! - **Codecs**: base64 / base64url for embedding binary data in URLs
//!
//! ## Security Model
//!
//! All encryption happens on the sharing client. Servers only ever see
//! ciphertext and opaque record identifiers; key material travels in URL
//! fragments which browsers never send over the network.
//!
//! Decryption failures are deliberately uniform: wrong key, wrong password,
//! tampered ciphertext, and mismatched AAD are indistinguishable to callers
//! so the API cannot be used as a guessing oracle.

pub mod encoding;
pub mod error;
pub mod kdf;
pub mod keys;
pub mod symmetric;
pub mod wrapped;

pub use error::{CryptoError, Result};
pub use kdf::{derive_key, KdfParams};
pub use keys::{DekKey, Salt, KEY_SIZE, NONCE_SIZE, SALT_SIZE};
pub use symmetric::{decrypt, encrypt, Aead, Nonce};
pub use wrapped::WrappedKey;
