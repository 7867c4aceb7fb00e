//! Short code generation.
//!
//! Codes are drawn from the OS CSPRNG so they cannot be predicted or
//! enumerated from previously issued codes.

use crate::error::AppError;
use serde_json::json;

/// Alphabet of generated codes: lowercase, uppercase, digits.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of short codes issued by the shortening service.
pub const SHORT_CODE_LENGTH: usize = 6;

/// Largest multiple of 62 that fits in a byte. Bytes at or above it are
/// rejected so every symbol keeps the same probability.
const ACCEPT_BELOW: u8 = (256 / ALPHABET.len() * ALPHABET.len()) as u8;

/// Codes that would be shadowed by fixed routes.
const RESERVED_CODES: &[&str] = &["api", "static", "health"];

/// Generates a random code of exactly `length` alphanumeric characters.
///
/// Each character is drawn independently and uniformly from [`ALPHABET`] by
/// rejection sampling bytes from `getrandom`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
/// There is no fallback to a weaker source.
///
/// # Examples
///
/// ```ignore
/// let code = generate(8)?;
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate(length: usize) -> Result<String, AppError> {
    let mut code = String::with_capacity(length);
    let mut buffer = vec![0u8; length.max(1) * 2];

    while code.len() < length {
        getrandom::fill(&mut buffer).map_err(|e| {
            AppError::internal(
                "Random number generator failure",
                json!({ "reason": e.to_string() }),
            )
        })?;

        for &byte in buffer.iter().filter(|&&b| b < ACCEPT_BELOW) {
            if code.len() == length {
                break;
            }
            code.push(ALPHABET[(byte as usize) % ALPHABET.len()] as char);
        }
    }

    Ok(code)
}

/// Generates a [`SHORT_CODE_LENGTH`]-character short code.
///
/// Codes equal to a reserved route segment are drawn again.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_short_code() -> Result<String, AppError> {
    loop {
        let code = generate(SHORT_CODE_LENGTH)?;
        if !is_reserved(&code) {
            return Ok(code);
        }
    }
}

/// Returns `true` if `code` collides with a fixed route segment.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Returns `true` if `code` has the shape of an issued short code:
/// [`SHORT_CODE_LENGTH`] characters, all from [`ALPHABET`].
///
/// Anything else cannot name a mapping and must not reach the store, where
/// counters share the keyspace under `clicks:<code>`.
pub fn is_valid_short_code(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.bytes().all(|b| ALPHABET.contains(&b))
}
