//! Observer surface and run outcome types.
//!
//! The driver performs no I/O. Everything a caller can observe during a
//! run flows through [`SolveObserver`]; the final best result and run
//! counters come back in [`SolveOutcome`].

use crate::node::Candidate;

/// Which kind of record the driver emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A candidate passed the fitness or English threshold.
    Output,
    /// A candidate contains the configured crib.
    CribFound,
}

/// A borrowed view of an emitted record.
#[derive(Debug, Clone, Copy)]
pub struct OutputRecord<'a> {
    pub depth: u32,
    pub fitness: f32,
    pub cumulative_fitness: f32,
    pub data: &'a [u8],
    pub method: &'a str,
    /// English composite score; present only on OUTPUT records in
    /// English mode.
    pub eng_score: Option<f32>,
}

/// Callbacks invoked by the driver during a run.
///
/// Implementations must not assume any ordering beyond: `on_candidate`
/// fires once per popped node, before any record for that node.
pub trait SolveObserver {
    /// An OUTPUT or CRIB FOUND record was emitted.
    fn on_record(&mut self, kind: RecordKind, record: &OutputRecord<'_>);

    /// The popped node's method string matched the monitor substring.
    fn on_monitor(&mut self, node: &Candidate) {
        let _ = node;
    }

    /// A node was popped from the frontier.
    fn on_candidate(&mut self, node: &Candidate) {
        let _ = node;
    }
}

/// Observer that ignores everything; useful for tests and library callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SolveObserver for NullObserver {
    fn on_record(&mut self, _kind: RecordKind, _record: &OutputRecord<'_>) {}
}

/// The single best candidate seen across a run.
///
/// In English mode `cumulative_fitness` holds the tracking key
/// `eng_score + 1` rather than the path sum; callers print it as the
/// aggregate either way.
#[derive(Debug, Clone, PartialEq)]
pub struct BestResult {
    pub data: Vec<u8>,
    pub method: String,
    pub fitness: f32,
    pub cumulative_fitness: f32,
    pub depth: u32,
}

impl BestResult {
    pub(crate) fn from_candidate(node: &Candidate, tracking_key: f32) -> Self {
        Self {
            data: node.data.clone(),
            method: node.method.clone(),
            fitness: node.fitness,
            cumulative_fitness: tracking_key,
            depth: node.depth,
        }
    }
}

/// Run counters, reported alongside the best result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Nodes that went through full expansion.
    pub expansions: u64,
    /// Children pushed onto the frontier.
    pub children_generated: u64,
    /// Hops discarded because the child equalled its parent.
    pub self_loops_discarded: u64,
    /// Nodes destroyed by frontier pruning.
    pub pruned: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: usize,
    /// Whether the wall-clock deadline ended the run.
    pub timed_out: bool,
}

/// Result of a solve run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveOutcome {
    pub best: BestResult,
    pub stats: SolveStats,
}
