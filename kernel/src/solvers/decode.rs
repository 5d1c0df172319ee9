//! Decoder-backed solvers: thin adapters from [`crate::codec`] to hops.

use crate::codec;
use crate::keychain::Keychain;
use crate::score::score_combined;
use crate::solvers::Hop;

fn single_hop(data: Vec<u8>, method: &str) -> Vec<Hop> {
    let fitness = score_combined(&data, false);
    vec![Hop {
        data,
        method: method.to_owned(),
        fitness,
    }]
}

pub fn hex(input: &[u8], _keychain: &Keychain) -> Vec<Hop> {
    match codec::hex::decode(input) {
        Some(bytes) => single_hop(bytes, "HEX"),
        None => Vec::new(),
    }
}

pub fn base64(input: &[u8], _keychain: &Keychain) -> Vec<Hop> {
    match codec::base64::decode(input) {
        Some(bytes) => single_hop(bytes, "BASE64"),
        None => Vec::new(),
    }
}

pub fn binary(input: &[u8], _keychain: &Keychain) -> Vec<Hop> {
    match codec::binary::decode(input) {
        Some(bytes) => single_hop(bytes, "BINARY"),
        None => Vec::new(),
    }
}

pub fn octal(input: &[u8], _keychain: &Keychain) -> Vec<Hop> {
    match codec::octal::decode(input) {
        Some(bytes) => single_hop(bytes, "OCTAL"),
        None => Vec::new(),
    }
}

/// Reinterpret the whole input under every base 2..=36.
///
/// The per-base penalty breaks ties toward smaller bases when several
/// reinterpretations score equally.
pub fn base(input: &[u8], _keychain: &Keychain) -> Vec<Hop> {
    let mut hops = Vec::new();
    for b in 2..=36u32 {
        let Some(decimal) = codec::radix::reinterpret(input, b) else {
            continue;
        };
        #[allow(clippy::cast_precision_loss)]
        let fitness = score_combined(decimal.as_bytes(), false) - 0.01 * (b as f32 / 36.0);
        hops.push(Hop {
            data: decimal.into_bytes(),
            method: format!("BASE(b={b})"),
            fitness,
        });
    }
    hops
}
