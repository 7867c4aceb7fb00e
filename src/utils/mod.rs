//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_normalizer`] - Scheme normalization of submitted URLs
//! - [`base_url`] - Base URL resolution for absolute short links

pub mod base_url;
pub mod code_generator;
pub mod url_normalizer;
