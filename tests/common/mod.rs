#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use qrlink::api::handlers::redirect_handler;
use qrlink::domain::click_event::ClickEvent;
use qrlink::domain::click_worker::run_click_worker;
use qrlink::infrastructure::store::{KeyValueStore, MemoryStore};
use qrlink::state::AppState;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;
use tower_http::services::ServeDir;

pub const TEST_HOST: &str = "s.example.com";

/// State backed by an in-memory store and a throwaway static dir.
pub struct TestContext {
    pub state: AppState,
    pub store: Arc<MemoryStore>,
    pub clicks: mpsc::Receiver<ClickEvent>,
    pub static_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self::build(None, 100)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self::build(Some(base_url), 100)
    }

    pub fn with_queue_capacity(capacity: usize) -> Self {
        Self::build(None, capacity)
    }

    fn build(base_url: Option<&str>, capacity: usize) -> Self {
        let store = Arc::new(MemoryStore::new());
        let static_dir = tempfile::tempdir().unwrap();
        let (tx, rx) = mpsc::channel(capacity);

        let state = AppState::new(
            store.clone(),
            static_dir.path(),
            base_url.map(str::to_string),
            tx,
        );

        Self {
            state,
            store,
            clicks: rx,
            static_dir,
        }
    }

    /// API, redirect and static routes, without the outer middleware.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/{code}", get(redirect_handler))
            .nest("/api", qrlink::api::routes::routes())
            .nest_service("/static", ServeDir::new(self.static_dir.path()))
            .with_state(self.state.clone())
    }

    pub fn server(&self) -> TestServer {
        TestServer::new(self.router()).unwrap()
    }

    /// Writes a mapping and a zero counter directly into the store.
    pub async fn seed_link(&self, code: &str, url: &str) {
        self.store
            .set_many(&[
                (code.to_string(), url.to_string()),
                (format!("clicks:{}", code), "0".to_string()),
            ])
            .await
            .unwrap();
    }

    /// Moves the click receiver into a running worker.
    pub fn spawn_click_worker(&mut self) -> tokio::task::JoinHandle<()> {
        let (_tx, placeholder) = mpsc::channel(1);
        let rx = std::mem::replace(&mut self.clicks, placeholder);
        tokio::spawn(run_click_worker(rx, self.state.stats_service.clone()))
    }

    /// Polls the counter until it reaches `expected` or a second has passed.
    pub async fn wait_for_clicks(&self, code: &str, expected: i64) -> i64 {
        let key = format!("clicks:{}", code);
        let mut current = 0;

        for _ in 0..100 {
            current = self
                .store
                .get(&key)
                .await
                .unwrap()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            if current >= expected {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        current
    }
}
