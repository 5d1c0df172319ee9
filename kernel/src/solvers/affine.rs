//! Affine cipher brute-forcer over the full `(a, b)` key space.

use crate::keychain::Keychain;
use crate::solvers::Hop;

const ALPHABET_SIZE: i32 = 26;

/// Multiplicative inverse of `a` modulo `m`, if one exists.
fn mod_inverse(a: i32, m: i32) -> Option<i32> {
    (1..m).find(|&i| (a * i) % m == 1)
}

/// Decrypt with key `(a, b)`: letters map through `a^-1 * (c - b) mod 26`,
/// case preserved, non-letters untouched. `None` when `a` has no inverse
/// modulo 26.
#[must_use]
pub fn decrypt(input: &[u8], a: i32, b: i32) -> Option<Vec<u8>> {
    let a_inv = mod_inverse(a, ALPHABET_SIZE)?;

    let out = input
        .iter()
        .map(|&c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                let x = i32::from(c - base);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let p = (a_inv * (x - b)).rem_euclid(ALPHABET_SIZE) as u8;
                base + p
            } else {
                c
            }
        })
        .collect();
    Some(out)
}

/// Try every `a` in 1..=25 with an inverse mod 26 and every `b` in 0..=25.
///
/// The fitness penalty grows with `a * 26 + b`, so simpler keys win ties;
/// `a = 1` (the Caesar family) is tried first.
pub fn solve(input: &[u8], _keychain: &Keychain) -> Vec<Hop> {
    let mut hops = Vec::new();
    for a in 1..ALPHABET_SIZE {
        for b in 0..ALPHABET_SIZE {
            let Some(plain) = decrypt(input, a, b) else {
                break; // no inverse for this a; b loop is pointless
            };
            #[allow(clippy::cast_precision_loss)]
            let fitness = 0.75 - 0.01 * ((a * 26 + b) as f32 / 676.0);
            hops.push(Hop {
                data: plain,
                method: format!("AFFINE a={a} b={b}"),
                fitness,
            });
        }
    }
    hops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encrypt(input: &[u8], a: i32, b: i32) -> Vec<u8> {
        input
            .iter()
            .map(|&c| {
                if c.is_ascii_alphabetic() {
                    let base = if c.is_ascii_uppercase() { b'A' } else { b'a' };
                    let x = i32::from(c - base);
                    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                    let e = (a * x + b).rem_euclid(ALPHABET_SIZE) as u8;
                    base + e
                } else {
                    c
                }
            })
            .collect()
    }

    #[test]
    fn caesar_three_decrypts() {
        assert_eq!(decrypt(b"KHOOR ZRUOG", 1, 3).unwrap(), b"HELLO WORLD");
    }

    #[test]
    fn preserves_case_and_punctuation() {
        assert_eq!(decrypt(b"Khoor, zruog!", 1, 3).unwrap(), b"Hello, world!");
    }

    #[test]
    fn rejects_non_invertible_a() {
        assert!(decrypt(b"ABC", 2, 0).is_none());
        assert!(decrypt(b"ABC", 13, 5).is_none());
    }

    #[test]
    fn round_trips_for_every_invertible_key() {
        let plain = b"The five boxing wizards jump quickly";
        for a in 1..ALPHABET_SIZE {
            if mod_inverse(a, ALPHABET_SIZE).is_none() {
                continue;
            }
            for b in [0, 7, 25] {
                let cipher = encrypt(plain, a, b);
                assert_eq!(decrypt(&cipher, a, b).unwrap(), plain, "a={a} b={b}");
            }
        }
    }

    #[test]
    fn brute_force_covers_invertible_key_space() {
        let hops = solve(b"KHOOR", &Keychain::default());
        // 12 invertible values of a, 26 values of b each.
        assert_eq!(hops.len(), 12 * 26);
        assert!(hops
            .iter()
            .any(|h| h.data == b"HELLO" && h.method == "AFFINE a=1 b=3"));
        // Simpler keys carry higher fitness.
        assert!(hops[0].fitness > hops.last().unwrap().fitness);
    }
}
