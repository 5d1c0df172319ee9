//! Vigenere decryption against a supplied keychain.

use crate::keychain::Keychain;
use crate::solvers::Hop;

/// Decrypt with one key. The key index advances only on alphabetic
/// positions; each key letter contributes its alphabet offset as the shift
/// (non-letter key bytes shift by zero). Case is preserved and non-letters
/// pass through.
#[must_use]
pub fn decrypt(input: &[u8], key: &str) -> Vec<u8> {
    let key = key.as_bytes();
    if key.is_empty() {
        return input.to_vec();
    }

    let mut key_idx = 0usize;
    input
        .iter()
        .map(|&c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let k = key[key_idx % key.len()];
                let shift = if k.is_ascii_uppercase() {
                    i32::from(k - b'A')
                } else if k.is_ascii_lowercase() {
                    i32::from(k - b'a')
                } else {
                    0
                };
                key_idx += 1;
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let p = (i32::from(c - base) - shift).rem_euclid(26) as u8;
                base + p
            } else {
                c
            }
        })
        .collect()
}

/// One hop per keychain entry. The penalty indexed by keychain position
/// makes earlier keys win ties.
pub fn solve(input: &[u8], keychain: &Keychain) -> Vec<Hop> {
    let mut hops = Vec::new();
    for (k, key) in keychain.keys().iter().enumerate() {
        if key.is_empty() {
            continue;
        }
        #[allow(clippy::cast_precision_loss)]
        let fitness = 0.75 - 0.01 * (k as f32 / keychain.len() as f32);
        hops.push(Hop {
            data: decrypt(input, key),
            method: format!("VIGENERE({key})"),
            fitness,
        });
    }
    hops
}
