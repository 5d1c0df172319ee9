//! Base64 decoding (standard alphabet, padding-aware).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Decode standard-alphabet Base64.
///
/// The input length must be a multiple of four; disallowed characters,
/// malformed padding, and empty decodes are all rejected with `None`.
#[must_use]
pub fn decode(input: &[u8]) -> Option<Vec<u8>> {
    if input.is_empty() || input.len() % 4 != 0 {
        return None;
    }

    let decoded = STANDARD.decode(input).ok()?;
    if decoded.is_empty() {
        return None;
    }
    Some(decoded)
}
