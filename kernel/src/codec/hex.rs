//! Hex decoding that tolerates interleaved junk.

/// Decode pairs of hex digits to bytes, skipping any non-hex bytes.
///
/// A trailing unpaired digit is dropped. Returns `None` when no complete
/// pair survives.
#[must_use]
pub fn decode(input: &[u8]) -> Option<Vec<u8>> {
    let mut digits: Vec<u8> = input
        .iter()
        .copied()
        .filter(u8::is_ascii_hexdigit)
        .collect();
    digits.truncate(digits.len() & !1);
    if digits.is_empty() {
        return None;
    }

    // The filtered buffer holds only valid digits, so this cannot fail.
    ::hex::decode(&digits).ok()
}
