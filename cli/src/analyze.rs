//! The analyze pass: a straight loop over the analyzer registry.

use descry_kernel::analyzers::{Analysis, REGISTRY};

/// One analyzer verdict that passed the probability threshold.
#[derive(Debug, Clone, Copy)]
pub struct Finding {
    pub label: &'static str,
    pub analysis: Analysis,
}

/// Run every analyzer over the input and keep verdicts at or above
/// `threshold`. Presentation order is registry declaration order.
#[must_use]
pub fn run_analysis(input: &[u8], threshold: f32) -> Vec<Finding> {
    REGISTRY
        .iter()
        .map(|analyzer| Finding {
            label: analyzer.label,
            analysis: (analyzer.run)(input),
        })
        .filter(|finding| finding.analysis.probability >= threshold)
        .collect()
}
