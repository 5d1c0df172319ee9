//! English-likeness heuristics: bigram density, letter-frequency chi-square,
//! and casing shape.
//!
//! The composite [`score_english_detailed`] is an output filter, not a
//! frontier-ordering signal; it is far more expensive than
//! [`super::fitness::score_combined`] and only runs when the caller opted
//! into English-quality filtering.

/// Most common English bigrams, uppercased.
/// Source: practicalcryptography.com English letter frequency tables.
const COMMON_BIGRAMS: [[u8; 2]; 140] = [
    *b"TH", *b"HE", *b"IN", *b"ER", *b"AN", *b"RE", *b"ON", *b"AT", *b"EN", *b"ND",
    *b"TI", *b"ES", *b"OR", *b"TE", *b"OF", *b"ED", *b"IS", *b"IT", *b"AL", *b"AR",
    *b"ST", *b"TO", *b"NT", *b"NG", *b"SE", *b"HA", *b"AS", *b"OU", *b"IO", *b"LE",
    *b"VE", *b"CO", *b"ME", *b"DE", *b"HI", *b"RI", *b"RO", *b"IC", *b"NE", *b"EA",
    *b"RA", *b"CE", *b"LI", *b"CH", *b"LL", *b"BE", *b"MA", *b"SI", *b"OM", *b"UR",
    *b"CA", *b"EL", *b"TA", *b"LA", *b"NS", *b"DI", *b"FO", *b"HO", *b"PE", *b"EC",
    *b"PR", *b"NO", *b"CT", *b"US", *b"OT", *b"IL", *b"TR", *b"NC", *b"AC", *b"RS",
    *b"LO", *b"AI", *b"LY", *b"IE", *b"GE", *b"UT", *b"SO", *b"RT", *b"WI", *b"UN",
    *b"EM", *b"WH", *b"AD", *b"OL", *b"PO", *b"WE", *b"UL", *b"ID", *b"EE", *b"EY",
    *b"SS", *b"OO", *b"FF", *b"OW", *b"LS", *b"EI", *b"RN", *b"AB", *b"PL", *b"TT",
    *b"EW", *b"IF", *b"EX", *b"SP", *b"UA", *b"MY", *b"IV", *b"DA", *b"CK", *b"FT",
    *b"GH", *b"KE", *b"RM", *b"SW", *b"SU", *b"EP", *b"CI", *b"BL", *b"RY", *b"EF",
    *b"OP", *b"SH", *b"UP", *b"IP", *b"IM", *b"GR", *b"TY", *b"NK", *b"OY", *b"AY",
    *b"PT", *b"DR", *b"AM", *b"OS", *b"AP", *b"AG", *b"OD", *b"AV", *b"IB", *b"KN",
];

/// Relative frequency of each letter A..Z in English text.
const ENGLISH_FREQ: [f32; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094,
    0.06966, 0.00153, 0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929,
    0.00095, 0.05987, 0.06327, 0.09056, 0.02758, 0.00978, 0.02360, 0.00150,
    0.01974, 0.00074,
];

/// Bigram densities below this read as random noise and score 0.
const BIGRAM_CUTOFF: f32 = 0.28;
/// Densities from the cutoff up to this map linearly onto `[0, 1]`.
const BIGRAM_CEILING: f32 = 0.55;

const WEIGHT_FREQ: f32 = 0.3;
const WEIGHT_BIGRAM: f32 = 0.5;
const WEIGHT_CASING: f32 = 0.2;

/// Density of common English bigrams over all 2-grams of the text.
///
/// Random letter sequences land around 20% density against this table;
/// English prose lands well above 50%. Densities under the cutoff score 0,
/// and the band `[0.28, 0.55]` maps linearly onto `[0, 1]`, clamped.
/// Inputs shorter than 2 bytes score 0.
#[must_use]
pub fn score_english_bigram(data: &[u8]) -> f32 {
    if data.len() < 2 {
        return 0.0;
    }

    let match_count = data
        .windows(2)
        .filter(|w| {
            let gram = [w[0].to_ascii_uppercase(), w[1].to_ascii_uppercase()];
            COMMON_BIGRAMS.contains(&gram)
        })
        .count();

    #[allow(clippy::cast_precision_loss)]
    let density = match_count as f32 / (data.len() - 1) as f32;

    if density < BIGRAM_CUTOFF {
        return 0.0;
    }
    ((density - BIGRAM_CUTOFF) / (BIGRAM_CEILING - BIGRAM_CUTOFF)).min(1.0)
}

/// Chi-square fit of the letter histogram against English frequencies.
///
/// Only alphabetic bytes participate. Returns `50 / (50 + chi_sq)`, so a
/// perfect fit approaches 1 and a wildly skewed histogram approaches 0.
/// Input with no alphabetic bytes scores 0.
#[must_use]
pub fn score_letter_frequency(data: &[u8]) -> f32 {
    let mut counts = [0u32; 26];
    let mut total = 0u32;
    for &b in data {
        if b.is_ascii_alphabetic() {
            counts[usize::from(b.to_ascii_lowercase() - b'a')] += 1;
            total += 1;
        }
    }
    if total == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let total = total as f32;
    let mut chi_sq = 0.0f32;
    for (i, &count) in counts.iter().enumerate() {
        let expected = ENGLISH_FREQ[i] * total;
        #[allow(clippy::cast_precision_loss)]
        let diff = count as f32 - expected;
        chi_sq += (diff * diff) / (expected + 0.0001);
    }

    50.0 / (50.0 + chi_sq)
}

/// Casing-shape heuristic: upper/lower ratio plus sentence-start capitals.
///
/// The ratio bucket tolerates more capitals in short strings (names,
/// titles); all-lowercase is lightly penalized rather than zeroed. The
/// sentence sub-score checks that the first letter after start-of-text or a
/// terminator (`.` `!` `?`) is capitalized. Weighted `0.6 * casing +
/// 0.4 * sentence`.
#[must_use]
pub fn score_english_casing(data: &[u8]) -> f32 {
    if data.is_empty() {
        return 0.0;
    }

    let mut total_chars = 0u32;
    let mut upper_count = 0u32;
    let mut sentence_checks = 0u32;
    let mut sentence_hits = 0u32;
    let mut expect_capital = true;

    for &b in data {
        if b.is_ascii_alphabetic() {
            total_chars += 1;
            if b.is_ascii_uppercase() {
                upper_count += 1;
                if expect_capital {
                    sentence_hits += 1;
                }
            }
            if expect_capital {
                sentence_checks += 1;
                expect_capital = false;
            }
        }
        if matches!(b, b'.' | b'!' | b'?') {
            expect_capital = true;
        }
    }

    if total_chars == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let casing_ratio = upper_count as f32 / total_chars as f32;

    // Relaxed ceiling for short strings.
    let max_ratio = if data.len() < 25 { 0.40 } else { 0.20 };

    let casing_score = if casing_ratio > 0.01 && casing_ratio < max_ratio {
        1.0
    } else if casing_ratio == 0.0 {
        0.2
    } else if data.len() < 25 && casing_ratio < 0.60 {
        0.5
    } else {
        0.0
    };

    let sentence_score = if sentence_checks > 0 {
        #[allow(clippy::cast_precision_loss)]
        let s = sentence_hits as f32 / sentence_checks as f32;
        s
    } else {
        0.5
    };

    casing_score * 0.6 + sentence_score * 0.4
}

/// Composite English score: `0.3 * freq + 0.5 * bigram + 0.2 * casing`.
#[must_use]
pub fn score_english_detailed(data: &[u8]) -> f32 {
    let s_freq = score_letter_frequency(data);
    let s_bigram = score_english_bigram(data);
    let s_casing = score_english_casing(data);

    s_freq * WEIGHT_FREQ + s_bigram * WEIGHT_BIGRAM + s_casing * WEIGHT_CASING
}
