//! Solve policy: budgets, thresholds, and markers for one search run.

use std::time::Duration;

/// Configuration for a single solve run.
///
/// Thresholds are fractions in `[0, 1]` (the CLI converts its percentage
/// options). A `None` threshold disables the corresponding behavior; a zero
/// `timeout` disables the deadline; a zero `max_frontier_size` disables
/// pruning.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvePolicy {
    /// Depth cutoff: nodes at this depth are reported but not expanded.
    pub max_depth: u32,
    /// Frontier prune ceiling (0 = unbounded).
    pub max_frontier_size: usize,
    /// Wall-clock deadline (zero = no deadline).
    pub timeout: Duration,
    /// Per-hop fitness threshold for OUTPUT record emission.
    pub fitness_threshold: Option<f32>,
    /// English-quality threshold; also switches best tracking to the
    /// English score.
    pub english_threshold: Option<f32>,
    /// Known-plaintext marker: candidates containing it short-circuit.
    pub crib: Option<String>,
    /// Diagnostic tap on method strings containing this substring.
    pub monitor: Option<String>,
}

impl SolvePolicy {
    /// Whether English-quality filtering and best tracking are active.
    #[must_use]
    pub fn english_mode(&self) -> bool {
        self.english_threshold.is_some()
    }
}

impl Default for SolvePolicy {
    fn default() -> Self {
        Self {
            max_depth: 1,
            max_frontier_size: 10_000,
            timeout: Duration::from_secs(10),
            fitness_threshold: None,
            english_threshold: None,
            crib: None,
            monitor: None,
        }
    }
}
