//! # qrlink
//!
//! A small URL shortening service with click counting and QR code rendering,
//! built with Axum and Redis.
//!
//! ## Architecture
//!
//! The crate keeps a layered layout:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, click pipeline
//! - **Application Layer** ([`application`]) - Shortening, stats and QR services
//! - **Infrastructure Layer** ([`infrastructure`]) - Key-value store and repository implementations
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML landing page
//!
//! ## Features
//!
//! - Random 6-character alphanumeric short codes from the OS CSPRNG
//! - Mapping and zeroed click counter written in one atomic store operation
//! - Fire-and-forget click counting through a background worker
//! - On-demand QR code PNGs served as static files
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! cargo run
//!
//! # or without Redis
//! STORE_BACKEND=memory cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, QrService, StatsService};
    pub use crate::domain::entities::{Link, LinkStats, QrArtifact, ShortenedLink};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{KeyValueStore, MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
