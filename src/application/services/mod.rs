//! Business logic services for the application layer.

pub mod link_service;
pub mod qr_service;
pub mod stats_service;

pub use link_service::LinkService;
pub use qr_service::QrService;
pub use stats_service::StatsService;
