//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and resolution
//! - [`services::stats_service::StatsService`] - Click counters and reports
//! - [`services::qr_service::QrService`] - QR image rendering

pub mod services;
