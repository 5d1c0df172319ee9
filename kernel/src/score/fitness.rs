//! Per-hop fitness: printability decay with an entropy fallback.

/// Printable for scoring purposes: ASCII printable plus tab, CR, LF.
#[must_use]
pub fn is_scorable_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e | b'\t' | b'\r' | b'\n')
}

/// Base-2 Shannon entropy over the byte histogram, in `[0, 8]`.
///
/// 0 means a single repeated byte value; 8 means a uniform distribution
/// over all 256 values. Empty input returns 0.
#[must_use]
pub fn shannon_entropy(data: &[u8]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }

    let mut counts = [0usize; 256];
    for &b in data {
        counts[usize::from(b)] += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    let len = data.len() as f32;
    let mut entropy = 0.0f32;
    for &count in &counts {
        if count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let p = count as f32 / len;
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Combined per-hop fitness.
///
/// Fully printable input scores 1.0 outright; anything containing a
/// non-printable byte falls through to the entropy-normalized score
/// `max(0, (8 - H) / 8)`, which mildly prefers structured bytes over
/// uniform noise. `force_entropy` skips the printability shortcut and
/// always returns the entropy-normalized score. Empty input scores 0.
#[must_use]
pub fn score_combined(data: &[u8], force_entropy: bool) -> f32 {
    if data.is_empty() {
        return 0.0;
    }

    let all_printable = data.iter().all(|&b| is_scorable_printable(b));
    if !force_entropy && all_printable {
        return 1.0;
    }

    let ent_score = (8.0 - shannon_entropy(data)) / 8.0;
    ent_score.max(0.0)
}
