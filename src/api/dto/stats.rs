//! DTOs for link statistics.

use serde::Serialize;

use crate::domain::entities::LinkStats;

/// Click report for a specific short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: i64,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_code: stats.code,
            original_url: stats.original_url,
            clicks: stats.clicks,
        }
    }
}
