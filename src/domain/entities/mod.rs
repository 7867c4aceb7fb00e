//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic.
//!
//! # Entity Types
//!
//! - [`Link`] - A short code to URL mapping
//! - [`LinkStats`] - Click report for a link
//! - [`ShortenedLink`] - Output of a shorten operation
//! - [`QrArtifact`] - A generated QR image

pub mod link;
pub mod qr;

pub use link::{CLICKS_KEY_PREFIX, Link, LinkStats, ShortenedLink, clicks_key};
pub use qr::QrArtifact;
