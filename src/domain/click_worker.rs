//! Background worker that applies queued clicks to the counters.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::services::StatsService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Drains the click queue until every sender is dropped.
///
/// Each event increments `clicks:<code>` once. A failed increment is logged and
/// the click is lost; it never reaches the visitor, whose redirect has already
/// been answered.
pub async fn run_click_worker<R: LinkRepository + 'static>(
    mut rx: mpsc::Receiver<ClickEvent>,
    stats_service: Arc<StatsService<R>>,
) {
    info!("Click worker running");

    while let Some(event) = rx.recv().await {
        match stats_service.record_click(&event.code).await {
            Ok(clicks) => debug!(code = %event.code, clicks, "Click recorded"),
            Err(e) => warn!(code = %event.code, error = %e, "Failed to record click"),
        }
    }

    info!("Click queue closed, worker stopped");
}
