//! In-memory record store for testing and demos

use crate::{RecordId, RecordStore, Result, StoreError};
use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;
use std::sync::Arc;

/// An in-memory record store keyed by random UUIDs
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<DashMap<RecordId, Bytes>>,
}

impl MemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
        }
    }

    /// Get the number of records stored
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Clear all records
    pub fn clear(&self) {
        self.records.clear();
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn create(&self, data: Bytes) -> Result<RecordId> {
        let id = RecordId::new(uuid::Uuid::new_v4().to_string());
        self.records.insert(id.clone(), data);
        Ok(id)
    }

    async fn read(&self, id: &RecordId) -> Result<Bytes> {
        self.records
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &RecordId, data: Bytes) -> Result<()> {
        match self.records.get_mut(id) {
            Some(mut entry) => {
                *entry.value_mut() = data;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }
}
