//! In-process store implementation for local development and tests.

use super::service::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// A store that keeps every key in a `HashMap`.
///
/// Data lives only as long as the process. Semantics mirror the Redis
/// commands used by [`super::RedisStore`], including `INCR` failing on
/// non-integer values.
///
/// # Use Cases
///
/// - Development environments without Redis (`STORE_BACKEND=memory`)
/// - Handler tests that need a real store without a server
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using MemoryStore (data is not persisted)");
        Self::default()
    }

    /// Returns the number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if no keys are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn set_many(&self, entries: &[(String, String)]) -> StoreResult<()> {
        let mut guard = self.entries.write().await;
        for (key, value) in entries {
            guard.insert(key.clone(), value.clone());
        }
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut guard = self.entries.write().await;

        let current = match guard.get(key) {
            Some(value) => value.parse::<i64>().map_err(|_| {
                StoreError::Operation("value is not an integer or out of range".to_string())
            })?,
            None => 0,
        };

        let next = current + 1;
        guard.insert(key.to_string(), next.to_string());
        Ok(next)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
