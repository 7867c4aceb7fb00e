//! HTML rendering handlers.

mod home;

pub use home::{IndexTemplate, home_handler};
