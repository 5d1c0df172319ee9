//! Candidate nodes and the frontier ordering key.

/// A point in the search graph: some decoded bytes plus the path that
/// produced them.
///
/// Frontier extraction orders by the depth-normalized score
/// `cumulative_fitness / (depth + 1)`; ties prefer the higher raw
/// cumulative fitness (deeper paths at equal average).
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// Candidate text; may contain non-printable bytes.
    pub data: Vec<u8>,
    /// Per-hop fitness of the step that produced this node.
    pub fitness: f32,
    /// Sum of per-hop fitnesses along the path from the root.
    pub cumulative_fitness: f32,
    /// Hops from the root (root = 0).
    pub depth: u32,
    /// Human-readable path, one ` -> <label>` suffix per hop.
    pub method: String,
    /// Label of the solver that produced this node (`None` at the root).
    pub last_solver: Option<&'static str>,
}

impl Candidate {
    /// The root node wrapping the raw ciphertext.
    #[must_use]
    pub fn root(data: Vec<u8>) -> Self {
        Self {
            data,
            fitness: 1.0,
            cumulative_fitness: 1.0,
            depth: 0,
            method: "CIPHERTEXT".to_owned(),
            last_solver: None,
        }
    }

    /// Depth-normalized composite score, the primary frontier key.
    #[must_use]
    pub fn normalized_score(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let hops = self.depth as f32 + 1.0;
        self.cumulative_fitness / hops
    }

    /// Substring search over the candidate bytes.
    #[must_use]
    pub fn contains(&self, needle: &[u8]) -> bool {
        needle.is_empty() || self.data.windows(needle.len()).any(|w| w == needle)
    }
}

/// The frontier ordering key: `(normalized score, cumulative fitness)`.
///
/// `Ord` is "smaller is better": a higher normalized score compares `Less`.
/// Floats are compared with `total_cmp`, which is a total order, so the
/// heap invariants hold for any score values.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    score: f32,
    cumulative: f32,
}

impl From<&Candidate> for FrontierKey {
    fn from(node: &Candidate) -> Self {
        Self {
            score: node.normalized_score(),
            cumulative: node.cumulative_fitness,
        }
    }
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.cumulative.total_cmp(&self.cumulative))
    }
}
