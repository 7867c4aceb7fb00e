//! Shared application state injected into every handler.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{LinkService, QrService, StatsService};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::KvLinkRepository;
use crate::infrastructure::store::KeyValueStore;

/// Link service bound to the key-value repository.
pub type AppLinkService = LinkService<KvLinkRepository>;

/// Stats service bound to the key-value repository.
pub type AppStatsService = StatsService<KvLinkRepository>;

/// State cloned into each request.
///
/// Holds no mutable data of its own: the store is the single source of truth
/// and every field is either an `Arc` or a channel sender.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub stats_service: Arc<AppStatsService>,
    pub qr_service: Arc<QrService>,
    pub store: Arc<dyn KeyValueStore>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Overrides the `Host`-derived base of short links when set.
    pub base_url: Option<String>,
}

impl AppState {
    /// Wires services around a store handle.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        static_root: impl Into<PathBuf>,
        base_url: Option<String>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        let link_repository = Arc::new(KvLinkRepository::new(store.clone()));

        Self {
            link_service: Arc::new(LinkService::new(link_repository.clone())),
            stats_service: Arc::new(StatsService::new(link_repository)),
            qr_service: Arc::new(QrService::new(static_root)),
            store,
            click_sender,
            base_url,
        }
    }
}
