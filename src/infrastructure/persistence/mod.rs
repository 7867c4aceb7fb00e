//! Repository implementations over the key-value store.
//!
//! # Repositories
//!
//! - [`KvLinkRepository`] - Link mappings and click counters

pub mod kv_link_repository;

pub use kv_link_repository::KvLinkRepository;
