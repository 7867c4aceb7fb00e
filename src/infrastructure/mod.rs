//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Key-value store abstraction (Redis and in-memory implementations)
//! - [`persistence`] - Repository implementations over the store

pub mod persistence;
pub mod store;
