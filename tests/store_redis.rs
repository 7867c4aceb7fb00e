//! Tests against a live Redis instance.
//!
//! Run with `REDIS_URL=redis://127.0.0.1:6379/15 cargo test -- --ignored`.
//! Keys are prefixed with a random tag and are left behind in the database.

use qrlink::infrastructure::persistence::KvLinkRepository;
use qrlink::infrastructure::store::{KeyValueStore, RedisStore, StoreError};
use qrlink::application::services::{LinkService, StatsService};
use qrlink::utils::code_generator;
use std::sync::Arc;

async fn connect() -> RedisStore {
    let url = std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379/15".into());
    RedisStore::connect(&url).await.unwrap()
}

fn key(name: &str) -> String {
    format!("qrlink-test-{}-{}", code_generator::generate(10).unwrap(), name)
}

#[tokio::test]
#[ignore = "requires a running Redis at REDIS_URL"]
async fn test_set_and_get() {
    let store = connect().await;
    let k = key("value");

    assert_eq!(store.get(&k).await.unwrap(), None);

    store.set(&k, "https://example.com").await.unwrap();

    assert_eq!(
        store.get(&k).await.unwrap().as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test]
#[ignore = "requires a running Redis at REDIS_URL"]
async fn test_set_many_and_incr() {
    let store = connect().await;
    let url_key = key("url");
    let clicks_key = key("clicks");

    store
        .set_many(&[
            (url_key.clone(), "https://example.com".to_string()),
            (clicks_key.clone(), "0".to_string()),
        ])
        .await
        .unwrap();

    assert_eq!(store.incr(&clicks_key).await.unwrap(), 1);
    assert_eq!(store.incr(&clicks_key).await.unwrap(), 2);
    assert_eq!(store.get(&clicks_key).await.unwrap().as_deref(), Some("2"));
}

#[tokio::test]
#[ignore = "requires a running Redis at REDIS_URL"]
async fn test_incr_non_integer_fails() {
    let store = connect().await;
    let k = key("text");

    store.set(&k, "not-a-number").await.unwrap();

    assert!(matches!(
        store.incr(&k).await,
        Err(StoreError::Operation(_))
    ));
}

#[tokio::test]
#[ignore = "requires a running Redis at REDIS_URL"]
async fn test_health_check() {
    let store = connect().await;
    assert!(store.health_check().await);
}

#[tokio::test]
#[ignore = "requires a running Redis at REDIS_URL"]
async fn test_shorten_and_count_clicks() {
    let store: Arc<dyn KeyValueStore> = Arc::new(connect().await);
    let repository = Arc::new(KvLinkRepository::new(store));
    let links = LinkService::new(repository.clone());
    let stats = StatsService::new(repository);

    let link = links
        .shorten("example.com", "http://s.example.com")
        .await
        .unwrap();

    assert_eq!(links.resolve(&link.code).await.unwrap(), "https://example.com");
    assert_eq!(stats.get_stats(&link.code).await.unwrap().clicks, 0);

    stats.record_click(&link.code).await.unwrap();
    stats.record_click(&link.code).await.unwrap();

    assert_eq!(stats.get_stats(&link.code).await.unwrap().clicks, 2);
}

#[tokio::test]
#[ignore = "requires a running Redis at REDIS_URL"]
async fn test_connect_to_unreachable_server() {
    let result = RedisStore::connect("redis://127.0.0.1:1/0").await;
    assert!(matches!(result, Err(StoreError::Connection(_))));
}
