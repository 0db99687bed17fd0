//! # Sealink Protocol
//!
//! Envelope-encryption share links: one client produces a URL that another
//! client can open to recover a payload, without any server seeing
//! plaintext or holding the decryption key.
//!
//! ## Flow
//!
//! ```text
//! create:  payload ──[DEK]──> ciphertext ──┬─> link (simple)
//!                                          └─> store ──> id ──[DEK]──> link (cloud/dynamic)
//! receive: link ──parse──> params ──[DEK]──> id? ──store──> ciphertext ──[DEK]──> payload
//! ```
//!
//! Key material lives in the URL fragment, which browsers never transmit.
//! An optional password wraps the DEK under an Argon2id-derived KEK; an
//! optional expiry date is bound as AAD into every ciphertext so tampering
//! with it breaks decryption.
//!
//! ## Example
//!
//! ```rust,ignore
//! use sealink_protocol::{ShareClient, ShareConfig, ShareOptions, ShareMode};
//! use sealink_store::MemoryRecordStore;
//! use std::sync::Arc;
//!
//! let client = ShareClient::new(ShareConfig::default())
//!     .with_store(Arc::new(MemoryRecordStore::new()));
//!
//! let created = client
//!     .create_share(b"meet at dawn", ShareOptions { mode: ShareMode::Cloud, ..Default::default() })
//!     .await?;
//! let payload = client.receive_share(&created.url).await?;
//! ```

mod client;
pub mod compress;
mod config;
mod dynamic;
mod envelope;
mod error;
pub mod handlers;
mod mode;
mod params;

pub use client::ShareClient;
pub use config::{ShareConfig, DEFAULT_MAX_ENCODED_PAYLOAD};
pub use envelope::{CreatedShare, ShareOptions};
pub use error::{Result, ShareError};
pub use handlers::{HandlerError, HistoryScrub, NoPassword, PasswordPrompt, StaticPassword, UrlShortener};
pub use mode::ShareMode;
pub use params::{KeyMaterial, ShareLinkParams, EXPIRY_FORMAT};

// Re-export the store contract alongside the protocol for convenience
pub use sealink_store::{MemoryRecordStore, RecordId, RecordStore};
