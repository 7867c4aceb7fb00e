//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces, and the click pipeline independent
//! of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler resolves a short code and answers with a redirect
//! 2. [`click_event::ClickEvent`] is sent to a bounded channel
//! 3. [`click_worker::run_click_worker`] increments the counter
//! 4. Failures are logged only; the redirect is never affected

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
