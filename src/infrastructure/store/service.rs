//! Store trait and error types.

use async_trait::async_trait;

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation error: {0}")]
    Operation(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// String key-value store used as the single source of truth.
///
/// Unlike a cache, failures are propagated: callers decide whether an error
/// is fatal for the request (shortening, lookups) or only logged (click
/// increments).
///
/// Only single-key operations are atomic, with the exception of
/// [`KeyValueStore::set_many`] which writes all entries as one unit.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis over a `ConnectionManager`
/// - [`crate::infrastructure::store::MemoryStore`] - `HashMap` behind a `RwLock`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key does not exist.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Stores every entry atomically; either all keys are written or none.
    async fn set_many(&self, entries: &[(String, String)]) -> StoreResult<()>;

    /// Increments the integer stored under `key` by one and returns the new value.
    ///
    /// A missing key counts as `0`. A non-integer value is an operation error.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Checks whether the backend is reachable.
    async fn health_check(&self) -> bool;
}
