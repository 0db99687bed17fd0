//! # Sealink Store
//!
//! Storage abstraction consumed by the share-link protocol.
//!
//! Indirect share modes hand an encrypted blob to a [`RecordStore`] and
//! embed only the returned opaque identifier in the link. The store never
//! sees plaintext or key material; its consistency guarantees
//! (read-after-write, concurrent update races) are entirely its own
//! concern — the protocol adds no locking around store calls.
//!
//! The [`MemoryRecordStore`] implementation backs tests and demos.

pub mod error;
pub mod memory;

pub use error::{Result, StoreError};
pub use memory::MemoryRecordStore;

use async_trait::async_trait;
use bytes::Bytes;

/// An opaque record identifier returned by a store
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    /// Create an identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Trait for record storage backends.
///
/// Data records are written once via [`create`](RecordStore::create) and
/// never mutated; pointer records reuse [`update`](RecordStore::update) to
/// repoint a fixed identifier at new content.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Store a new record and return its identifier
    async fn create(&self, data: Bytes) -> Result<RecordId>;

    /// Retrieve a record by identifier
    async fn read(&self, id: &RecordId) -> Result<Bytes>;

    /// Overwrite an existing record's content
    async fn update(&self, id: &RecordId, data: Bytes) -> Result<()>;
}
