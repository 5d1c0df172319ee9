//! Top-paths tracker: keeps the five best distinct candidates seen.

use descry_search::node::Candidate;

const TOP_N: usize = 5;

#[derive(Debug, Clone)]
struct ViewEntry {
    fitness: f32,
    cumulative_fitness: f32,
    depth: u32,
    data: Vec<u8>,
    method: String,
}

/// Tracks the top distinct candidates by cumulative fitness.
///
/// Entries are deduplicated by candidate data; a better path to the same
/// data replaces the stored one. When full, a new candidate bumps the worst
/// slot only if it scores higher.
#[derive(Debug, Clone, Default)]
pub struct TopView {
    entries: Vec<ViewEntry>,
}

impl TopView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate to the tracker.
    pub fn update(&mut self, node: &Candidate) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.data == node.data) {
            if node.cumulative_fitness <= existing.cumulative_fitness {
                return;
            }
            existing.fitness = node.fitness;
            existing.cumulative_fitness = node.cumulative_fitness;
            existing.depth = node.depth;
            existing.method.clone_from(&node.method);
        } else if self.entries.len() < TOP_N {
            self.entries.push(Self::entry_for(node));
        } else {
            let worst = self
                .entries
                .iter()
                .enumerate()
                .min_by(|(_, a), (_, b)| a.cumulative_fitness.total_cmp(&b.cumulative_fitness))
                .map(|(i, _)| i);
            let Some(worst) = worst else { return };
            if node.cumulative_fitness <= self.entries[worst].cumulative_fitness {
                return;
            }
            self.entries[worst] = Self::entry_for(node);
        }

        self.entries
            .sort_by(|a, b| b.cumulative_fitness.total_cmp(&a.cumulative_fitness));
    }

    fn entry_for(node: &Candidate) -> ViewEntry {
        ViewEntry {
            fitness: node.fitness,
            cumulative_fitness: node.cumulative_fitness,
            depth: node.depth,
            data: node.data.clone(),
            method: node.method.clone(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render the tracked paths, best first, one line each.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            let preview: String = String::from_utf8_lossy(&entry.data).chars().take(20).collect();
            out.push_str(&format!(
                "[{}] [{:.0}%] [Agg:{:.2}] \"{}\" ({})\n",
                entry.depth,
                entry.fitness * 100.0,
                entry.cumulative_fitness,
                preview,
                entry.method,
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(cumulative: f32, tag: &str) -> Candidate {
        Candidate {
            data: tag.as_bytes().to_vec(),
            fitness: 0.5,
            cumulative_fitness: cumulative,
            depth: 1,
            method: format!("CIPHERTEXT -> {tag}"),
            last_solver: None,
        }
    }

    #[test]
    fn keeps_the_best_five_sorted() {
        let mut view = TopView::new();
        for (cum, tag) in [(0.1, "a"), (0.9, "b"), (0.5, "c"), (0.7, "d"), (0.3, "e"), (0.8, "f")] {
            view.update(&node(cum, tag));
        }
        let rendered = view.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("\"b\""), "{rendered}");
        // "a" (0.1) was bumped by "f" (0.8).
        assert!(!rendered.contains("\"a\""));
    }

    #[test]
    fn duplicate_data_updates_in_place() {
        let mut view = TopView::new();
        view.update(&node(0.5, "same"));
        view.update(&node(0.9, "same"));
        view.update(&node(0.2, "same"));
        let rendered = view.render();
        assert_eq!(rendered.lines().count(), 1);
        assert!(rendered.contains("Agg:0.90"));
    }

    #[test]
    fn worse_candidates_do_not_displace_a_full_view() {
        let mut view = TopView::new();
        for i in 0..5 {
            view.update(&node(0.5, &format!("n{i}")));
        }
        view.update(&node(0.1, "loser"));
        assert!(!view.render().contains("loser"));
    }
}
