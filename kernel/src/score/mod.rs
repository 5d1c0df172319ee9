//! Text-quality heuristics used for frontier ordering and output filtering.
//!
//! All scoring functions take a byte slice and return an `f32` in `[0, 1]`
//! where higher means "more plaintext-like". [`fitness::score_combined`] is
//! the cheap per-hop signal that orders the search frontier;
//! [`english::score_english_detailed`] is the expensive composite used only
//! to filter and rank emitted output.

pub mod english;
pub mod fitness;

pub use english::{
    score_english_bigram, score_english_casing, score_english_detailed, score_letter_frequency,
};
pub use fitness::{score_combined, shannon_entropy};
