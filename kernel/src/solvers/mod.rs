//! The solver registry: named decoders and cipher brute-forcers.
//!
//! Every solver has the same shape: `(input bytes, keychain) -> hops`, where
//! each hop carries the decoded/decrypted output, a method suffix for path
//! reporting, and a per-hop fitness. Solvers recover from malformed input by
//! returning no hops; they never fail.
//!
//! Decoders score their single output with
//! [`crate::score::score_combined`]. Cipher brute-forcers emit printable
//! output by construction, so they use a fixed base fitness of 0.75 with a
//! tiny parameter-indexed penalty that deterministically prefers
//! lower-indexed keys on otherwise equal candidates.

use crate::keychain::Keychain;

pub mod affine;
pub mod decode;
pub mod morse;
pub mod railfence;
pub mod vigenere;

/// One solver output: a child candidate before it joins the search graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    /// Decoded or decrypted bytes.
    pub data: Vec<u8>,
    /// Method suffix appended to the parent's path string,
    /// e.g. `AFFINE a=1 b=3`.
    pub method: String,
    /// Per-hop fitness in `[0, 1]`.
    pub fitness: f32,
}

/// Signature shared by every solver.
pub type SolverFn = fn(&[u8], &Keychain) -> Vec<Hop>;

/// A registry entry describing one solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverDescriptor {
    /// Identifier used in method strings and for consecutive-application
    /// guards.
    pub label: &'static str,
    /// Advisory weight in `[0, 1]`: 1 = popular, 0.75 = common,
    /// 0.5 = uncommon, 0.25 = rare. Informational only.
    pub popularity: f32,
    /// When set, the driver skips this solver on nodes it produced itself.
    pub prevent_consecutive: bool,
    /// The solver implementation.
    pub run: SolverFn,
}

/// The full solver registry. Declaration order is the per-node expansion
/// order.
pub const REGISTRY: &[SolverDescriptor] = &[
    SolverDescriptor {
        label: "HEX",
        popularity: 1.0,
        prevent_consecutive: false,
        run: decode::hex,
    },
    SolverDescriptor {
        label: "BASE64",
        popularity: 1.0,
        prevent_consecutive: false,
        run: decode::base64,
    },
    SolverDescriptor {
        label: "BINARY",
        popularity: 0.75,
        prevent_consecutive: false,
        run: decode::binary,
    },
    SolverDescriptor {
        label: "OCTAL",
        popularity: 0.75,
        prevent_consecutive: false,
        run: decode::octal,
    },
    SolverDescriptor {
        label: "AFFINE",
        popularity: 0.5,
        prevent_consecutive: true,
        run: affine::solve,
    },
    SolverDescriptor {
        label: "VIGENERE",
        popularity: 0.5,
        prevent_consecutive: false,
        run: vigenere::solve,
    },
    SolverDescriptor {
        label: "BASE",
        popularity: 0.5,
        prevent_consecutive: false,
        run: decode::base,
    },
    SolverDescriptor {
        label: "RAILFENCE",
        popularity: 0.5,
        prevent_consecutive: false,
        run: railfence::solve,
    },
    SolverDescriptor {
        label: "MORSE",
        popularity: 0.75,
        prevent_consecutive: false,
        run: morse::solve,
    },
];

/// Failure to resolve a solver selection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// A requested name matched no registry entry.
    UnknownSolver { name: String },
}

impl std::fmt::Display for SelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSolver { name } => write!(f, "unknown solver: {name}"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Resolve a solver selection string against the registry.
///
/// `common` (or an empty string) selects the full registry. Anything else is
/// a case-insensitive comma-separated list of labels; the returned subset
/// preserves registry declaration order regardless of list order.
///
/// # Errors
///
/// Returns [`SelectError::UnknownSolver`] for any name that matches no
/// registry entry.
pub fn select_solvers(names: &str) -> Result<Vec<&'static SolverDescriptor>, SelectError> {
    let names = names.trim();
    if names.is_empty() || names.eq_ignore_ascii_case("common") {
        return Ok(REGISTRY.iter().collect());
    }

    let mut requested: Vec<&str> = Vec::new();
    for raw in names.split(',') {
        let name = raw.trim();
        if name.is_empty() {
            continue;
        }
        if !REGISTRY.iter().any(|s| s.label.eq_ignore_ascii_case(name)) {
            return Err(SelectError::UnknownSolver {
                name: name.to_owned(),
            });
        }
        requested.push(name);
    }

    Ok(REGISTRY
        .iter()
        .filter(|s| requested.iter().any(|n| s.label.eq_ignore_ascii_case(n)))
        .collect())
}
