//! Click event model for asynchronous click counting.

/// A click on a short link, queued for the background worker.
///
/// The redirect handler sends one event per successful resolution through a
/// bounded channel, so the response never waits on the counter write.
///
/// # Usage Flow
///
/// 1. Created in the redirect handler after the mapping was found
/// 2. Sent to the channel with `try_send` (dropped if the queue is full)
/// 3. Processed by [`crate::domain::click_worker::run_click_worker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    /// Creates a new click event for `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
