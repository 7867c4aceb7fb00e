//! Link entities: a short code mapping, its stats, and a freshly shortened link.

/// Prefix of the click counter key stored next to each mapping.
pub const CLICKS_KEY_PREFIX: &str = "clicks:";

/// Builds the click counter key for a short code (`clicks:<code>`).
pub fn clicks_key(code: &str) -> String {
    format!("{}{}", CLICKS_KEY_PREFIX, code)
}

/// Mapping between a short code and the original URL.
///
/// The mapping itself is stored under the bare code; the click counter lives
/// under [`clicks_key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
        }
    }

    /// Key of this link's click counter.
    pub fn clicks_key(&self) -> String {
        clicks_key(&self.code)
    }
}

/// Read-only click report for a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkStats {
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
}

/// Result of a shorten operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedLink {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
}
