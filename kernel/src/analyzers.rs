//! Label-only classifiers for the analyze pass.
//!
//! Analyzers never transform the input; each returns a probability in
//! `[0, 1]` plus a short message. Presentation order is declaration order.

use crate::score::score_english_detailed;

/// One analyzer verdict.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub probability: f32,
    pub message: &'static str,
}

/// A registry entry describing one analyzer.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerDescriptor {
    pub label: &'static str,
    /// Advisory weight, same scale as solver popularity.
    pub popularity: f32,
    pub run: fn(&[u8]) -> Analysis,
}

/// The full analyzer registry.
pub const REGISTRY: &[AnalyzerDescriptor] = &[
    AnalyzerDescriptor {
        label: "ENGLISH",
        popularity: 0.5,
        run: check_english,
    },
    AnalyzerDescriptor {
        label: "HEX",
        popularity: 0.5,
        run: check_hex,
    },
    AnalyzerDescriptor {
        label: "BASE64",
        popularity: 0.5,
        run: check_base64,
    },
    AnalyzerDescriptor {
        label: "SHA256",
        popularity: 0.5,
        run: check_sha256,
    },
    AnalyzerDescriptor {
        label: "MD5",
        popularity: 0.5,
        run: check_md5,
    },
];

fn hex_digit_fraction(input: &[u8]) -> f32 {
    let hex_count = input.iter().filter(|b| b.is_ascii_hexdigit()).count();
    #[allow(clippy::cast_precision_loss)]
    let fraction = hex_count as f32 / input.len() as f32;
    fraction
}

fn check_english(input: &[u8]) -> Analysis {
    Analysis {
        probability: score_english_detailed(input),
        message: "Possible English text",
    }
}

fn check_hex(input: &[u8]) -> Analysis {
    if input.is_empty() || input.len() % 2 != 0 {
        return Analysis {
            probability: 0.0,
            message: "Invalid string length",
        };
    }
    Analysis {
        probability: hex_digit_fraction(input),
        message: "Possible hex encoding",
    }
}

fn check_base64(input: &[u8]) -> Analysis {
    if input.is_empty() || input.len() % 4 != 0 {
        return Analysis {
            probability: 0.0,
            message: "Invalid string length",
        };
    }
    let is_b64 = |b: &u8| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'=');
    if !input.iter().all(is_b64) {
        return Analysis {
            probability: 0.0,
            message: "Invalid character",
        };
    }
    Analysis {
        probability: 1.0,
        message: "Possible Base64 encoding",
    }
}

fn check_sha256(input: &[u8]) -> Analysis {
    if input.len() != 64 {
        return Analysis {
            probability: 0.0,
            message: "Invalid length",
        };
    }
    Analysis {
        probability: hex_digit_fraction(input),
        message: "Possible SHA-256 hash",
    }
}

fn check_md5(input: &[u8]) -> Analysis {
    if input.len() != 32 {
        return Analysis {
            probability: 0.0,
            message: "Invalid length",
        };
    }
    Analysis {
        probability: hex_digit_fraction(input),
        message: "Possible MD5 hash",
    }
}
