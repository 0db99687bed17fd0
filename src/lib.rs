//! # Sealink
//!
//! Umbrella crate re-exporting the share-link protocol stack:
//!
//! - [`sealink_crypto`]: keys, Argon2id derivation, AES-256-GCM, key wrapping
//! - [`sealink_store`]: the record-storage contract and an in-memory backend
//! - [`sealink_protocol`]: the share client, link codec, and share modes
//!
//! Most users only need [`sealink_protocol`]'s surface, re-exported here.

pub use sealink_crypto as crypto;
pub use sealink_store as store;

pub use sealink_protocol::{
    CreatedShare, HandlerError, HistoryScrub, MemoryRecordStore, NoPassword, PasswordPrompt,
    RecordId, RecordStore, Result, ShareClient, ShareConfig, ShareError, ShareLinkParams,
    ShareMode, ShareOptions, StaticPassword, UrlShortener,
};
