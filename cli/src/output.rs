//! Record formatting and the console observer.
//!
//! The output record format is stable:
//!
//! ```text
//! [<depth>][<pct>%][Agg:<cum>]\t [OUTPUT|CRIB FOUND] "<data>" - Method: "<method>"
//! ```
//!
//! followed by a `\t [ENG: <e>%]` line when English mode is active. Data
//! longer than 61 characters is truncated to 58 plus `...`.

use std::fs::File;
use std::io::Write;

use descry_search::node::Candidate;
use descry_search::report::{BestResult, OutputRecord, RecordKind, SolveObserver};

use crate::view::TopView;

/// Render candidate bytes for display, truncating long data.
#[must_use]
pub fn display_data(data: &[u8]) -> String {
    let text = String::from_utf8_lossy(data);
    if text.chars().count() > 61 {
        let head: String = text.chars().take(58).collect();
        format!("{head}...")
    } else {
        text.into_owned()
    }
}

/// Format one emitted record (including the ENG line when present).
#[must_use]
pub fn format_record(kind: RecordKind, record: &OutputRecord<'_>) -> String {
    let label = match kind {
        RecordKind::Output => "OUTPUT",
        RecordKind::CribFound => "CRIB FOUND",
    };
    let mut line = format!(
        "[{}][{:.0}%][Agg:{:.2}]\t [{label}] \"{}\" - Method: \"{}\"",
        record.depth,
        record.fitness * 100.0,
        record.cumulative_fitness,
        display_data(record.data),
        record.method,
    );
    if let Some(eng) = record.eng_score {
        line.push_str(&format!("\n\t [ENG: {:.2}%]", eng * 100.0));
    }
    line
}

/// Print the final three-line best-result block.
pub fn print_best(best: &BestResult, english_mode: bool) {
    println!(
        "\n--- Best Result (Agg:{:.2}) IS_ENGLISH_MODE={} ---",
        best.cumulative_fitness,
        u8::from(english_mode)
    );
    println!(
        "[{}][{:.0}%]\t \"{}\"",
        best.depth,
        best.fitness * 100.0,
        String::from_utf8_lossy(&best.data)
    );
    println!("Method: \"{}\"", best.method);
    println!("----------------------------------\n");
}

/// Observer that prints records to stdout, mirrors them to an optional
/// output file, and feeds the top-paths tracker.
pub struct ConsoleObserver {
    mirror: Option<File>,
    view: Option<TopView>,
}

impl ConsoleObserver {
    /// `mirror` receives a copy of every emitted record; `track_view`
    /// enables the top-paths tracker (disabled in silent mode).
    #[must_use]
    pub fn new(mirror: Option<File>, track_view: bool) -> Self {
        Self {
            mirror,
            view: track_view.then(TopView::new),
        }
    }

    /// Hand back the tracker for the end-of-run summary.
    #[must_use]
    pub fn into_view(self) -> Option<TopView> {
        self.view
    }
}

impl SolveObserver for ConsoleObserver {
    fn on_record(&mut self, kind: RecordKind, record: &OutputRecord<'_>) {
        let line = format_record(kind, record);
        println!("{line}");
        if let Some(file) = &mut self.mirror {
            // Mirror failures must not kill the search.
            let _ = writeln!(file, "{line}");
        }
    }

    fn on_monitor(&mut self, node: &Candidate) {
        println!(
            "[MONITOR] [{}]\t [Agg:{:.2}] [Fit:{:.2}] \"{}\" - Method: \"{}\"",
            node.depth,
            node.cumulative_fitness,
            node.fitness,
            String::from_utf8_lossy(&node.data),
            node.method,
        );
    }

    fn on_candidate(&mut self, node: &Candidate) {
        if let Some(view) = &mut self.view {
            view.update(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_data_is_untouched() {
        assert_eq!(display_data(b"Hello World"), "Hello World");
        let exactly_61 = "x".repeat(61);
        assert_eq!(display_data(exactly_61.as_bytes()), exactly_61);
    }

    #[test]
    fn long_data_truncates_to_58_plus_ellipsis() {
        let long = "y".repeat(62);
        let shown = display_data(long.as_bytes());
        assert_eq!(shown.len(), 61);
        assert_eq!(shown, format!("{}...", "y".repeat(58)));
    }

    #[test]
    fn record_line_matches_the_stable_format() {
        let record = OutputRecord {
            depth: 1,
            fitness: 1.0,
            cumulative_fitness: 2.0,
            data: b"Hello World",
            method: "CIPHERTEXT -> BASE64",
            eng_score: None,
        };
        assert_eq!(
            format_record(RecordKind::Output, &record),
            "[1][100%][Agg:2.00]\t [OUTPUT] \"Hello World\" - Method: \"CIPHERTEXT -> BASE64\""
        );
    }

    #[test]
    fn english_mode_appends_the_eng_line() {
        let record = OutputRecord {
            depth: 2,
            fitness: 0.75,
            cumulative_fitness: 2.5,
            data: b"text",
            method: "CIPHERTEXT -> HEX -> AFFINE a=1 b=3",
            eng_score: Some(0.875),
        };
        let line = format_record(RecordKind::Output, &record);
        assert!(line.ends_with("\n\t [ENG: 87.50%]"), "{line}");
    }

    #[test]
    fn crib_records_use_the_distinguished_label() {
        let record = OutputRecord {
            depth: 1,
            fitness: 1.0,
            cumulative_fitness: 3.0,
            data: b"Hello World",
            method: "CIPHERTEXT -> BASE64",
            eng_score: None,
        };
        let line = format_record(RecordKind::CribFound, &record);
        assert!(line.contains("[CRIB FOUND]"));
    }
}
