//! Solve entry point and expansion loop.
//!
//! Best-first search over compositions of solver applications. Each
//! iteration pops the highest-scoring candidate, runs every enabled solver
//! over it, scores the children, and pushes them back onto the frontier.
//! The loop ends when the frontier empties or the wall-clock deadline
//! passes; either way the best candidate seen so far is returned.

use std::time::Instant;

use descry_kernel::keychain::Keychain;
use descry_kernel::score::score_english_detailed;
use descry_kernel::solvers::SolverDescriptor;

use crate::frontier::Frontier;
use crate::node::Candidate;
use crate::policy::SolvePolicy;
use crate::report::{
    BestResult, OutputRecord, RecordKind, SolveObserver, SolveOutcome, SolveStats,
};

fn record_for<'a>(node: &'a Candidate, eng_score: Option<f32>) -> OutputRecord<'a> {
    OutputRecord {
        depth: node.depth,
        fitness: node.fitness,
        cumulative_fitness: node.cumulative_fitness,
        data: &node.data,
        method: &node.method,
        eng_score,
    }
}

/// Run the solve search from `input`.
///
/// Per popped node `N`, in order: deadline check, monitor tap, record
/// emission against the configured thresholds, best tracking, crib
/// short-circuit, depth cap, frontier pruning, then expansion through every
/// solver in `solvers` (skipping a solver that produced `N` itself when it
/// opts out of consecutive application). Children equal to their parent are
/// dropped; children containing the crib are boosted so they surface fast.
///
/// The frontier owns every queued node; popping moves the node into this
/// function's scope and it is dropped after expansion. Termination drains
/// whatever the frontier still holds.
#[allow(clippy::too_many_lines)]
pub fn solve(
    input: &[u8],
    solvers: &[&SolverDescriptor],
    keychain: &Keychain,
    policy: &SolvePolicy,
    observer: &mut dyn SolveObserver,
) -> SolveOutcome {
    let start = Instant::now();
    let deadline_enabled = !policy.timeout.is_zero();
    let crib = policy.crib.as_deref().map(str::as_bytes);

    let root = Candidate::root(input.to_vec());
    let mut best = BestResult::from_candidate(&root, root.cumulative_fitness);

    let mut frontier = Frontier::new();
    frontier.push(root);

    let mut stats = SolveStats::default();

    while !frontier.is_empty() {
        if deadline_enabled && start.elapsed() >= policy.timeout {
            stats.timed_out = true;
            break;
        }

        let Some(node) = frontier.pop() else {
            break;
        };
        observer.on_candidate(&node);

        if let Some(marker) = &policy.monitor {
            if node.method.contains(marker.as_str()) {
                observer.on_monitor(&node);
            }
        }

        // The English composite is expensive; compute it once per pop and
        // only when English mode asked for it.
        let eng_score = policy
            .english_threshold
            .map(|_| score_english_detailed(&node.data));

        let passes_fitness = policy.fitness_threshold.is_some_and(|t| node.fitness > t);
        let passes_english = policy
            .english_threshold
            .zip(eng_score)
            .is_some_and(|(t, e)| e > t);
        if passes_fitness || passes_english {
            observer.on_record(RecordKind::Output, &record_for(&node, eng_score));
        }

        let tracking_key = match eng_score {
            Some(e) => e + 1.0,
            None => node.cumulative_fitness,
        };
        if tracking_key > best.cumulative_fitness {
            best = BestResult::from_candidate(&node, tracking_key);
        }

        if let Some(needle) = crib {
            if node.contains(needle) {
                observer.on_record(RecordKind::CribFound, &record_for(&node, None));
                continue; // do not expand a crib hit
            }
        }

        if node.depth >= policy.max_depth {
            continue;
        }

        if policy.max_frontier_size > 0 && frontier.len() > policy.max_frontier_size {
            stats.pruned += frontier.prune_to(policy.max_frontier_size) as u64;
        }

        for solver in solvers {
            if solver.prevent_consecutive && node.last_solver == Some(solver.label) {
                continue;
            }

            for hop in (solver.run)(&node.data, keychain) {
                if hop.data == node.data {
                    stats.self_loops_discarded += 1;
                    continue;
                }

                let mut child = Candidate {
                    cumulative_fitness: node.cumulative_fitness + hop.fitness,
                    fitness: hop.fitness,
                    method: format!("{} -> {}", node.method, hop.method),
                    depth: node.depth + 1,
                    last_solver: Some(solver.label),
                    data: hop.data,
                };
                if let Some(needle) = crib {
                    if child.contains(needle) {
                        // Pull crib hits to the front of the queue; the
                        // definitive handling happens when they pop.
                        child.fitness = 1.0;
                        child.cumulative_fitness += 1.0;
                    }
                }
                frontier.push(child);
                stats.children_generated += 1;
            }
        }
        stats.expansions += 1;
    }

    stats.frontier_high_water = frontier.high_water();
    frontier.clear();

    SolveOutcome { best, stats }
}
