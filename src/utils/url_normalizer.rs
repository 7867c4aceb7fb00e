//! URL normalization for the shortening service.

/// Schemes accepted as already explicit.
const EXPLICIT_SCHEMES: &[&str] = &["http://", "https://"];

/// Scheme prepended to inputs without an explicit one.
const DEFAULT_SCHEME: &str = "https://";

/// Ensures a URL carries an explicit `http://` or `https://` scheme.
///
/// This is a textual prefix check, not a parse: the rest of the input is kept
/// as-is, so malformed URLs are accepted and stored unchanged apart from the
/// added scheme. The check is case-sensitive.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("example.com/page"), "https://example.com/page");
/// assert_eq!(normalize_url("http://example.com"), "http://example.com");
/// ```
pub fn normalize_url(input: &str) -> String {
    if EXPLICIT_SCHEMES
        .iter()
        .any(|scheme| input.starts_with(scheme))
    {
        input.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, input)
    }
}
