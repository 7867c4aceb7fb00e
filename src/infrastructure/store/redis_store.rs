//! Redis-backed store implementation.

use super::service::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Redis store implementation.
///
/// Uses `ConnectionManager` for automatic reconnection; the manager is cheap to
/// clone and safe to share across request tasks. Errors are propagated to the
/// caller as [`StoreError::Operation`].
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!(
            "Connecting to Redis at {}",
            crate::config::mask_connection_string(redis_url)
        );

        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("Connected to Redis");

        Ok(Self { client: manager })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();

        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            warn!("Redis GET error for {}: {}", key, e);
            StoreError::Operation(e.to_string())
        })
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            warn!("Redis SET error for {}: {}", key, e);
            StoreError::Operation(e.to_string())
        })?;

        debug!("Store SET: {}", key);
        Ok(())
    }

    async fn set_many(&self, entries: &[(String, String)]) -> StoreResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut conn = self.client.clone();

        // MSET is atomic in Redis
        conn.mset::<_, _, ()>(entries).await.map_err(|e| {
            warn!("Redis MSET error ({} keys): {}", entries.len(), e);
            StoreError::Operation(e.to_string())
        })?;

        debug!("Store MSET: {} keys", entries.len());
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.client.clone();

        conn.incr::<_, _, i64>(key, 1).await.map_err(|e| {
            warn!("Redis INCR error for {}: {}", key, e);
            StoreError::Operation(e.to_string())
        })
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
