//! Key-value store implementation of the link repository.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::domain::entities::{Link, clicks_key};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::store::KeyValueStore;

/// Link repository storing each mapping under its bare code and the click
/// counter under `clicks:<code>`.
pub struct KvLinkRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvLinkRepository {
    /// Creates a new repository over a store handle.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for KvLinkRepository {
    async fn create(&self, link: Link) -> Result<Link, AppError> {
        // Mapping and zeroed counter are written as one unit
        self.store
            .set_many(&[
                (link.code.clone(), link.original_url.clone()),
                (link.clicks_key(), "0".to_string()),
            ])
            .await?;

        Ok(link)
    }

    async fn find_url(&self, code: &str) -> Result<Option<String>, AppError> {
        Ok(self.store.get(code).await?)
    }

    async fn increment_clicks(&self, code: &str) -> Result<i64, AppError> {
        Ok(self.store.incr(&clicks_key(code)).await?)
    }

    async fn find_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        let Some(raw) = self.store.get(&clicks_key(code)).await? else {
            return Ok(None);
        };

        match raw.parse::<i64>() {
            Ok(clicks) => Ok(Some(clicks)),
            Err(_) => {
                warn!(code = %code, value = %raw, "Click counter is not an integer");
                Ok(None)
            }
        }
    }
}
