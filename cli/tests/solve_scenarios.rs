//! End-to-end solve scenarios driven through the argument surface.

use std::io::Write;

use descry_cli::args::Args;
use descry_cli::output::{format_record, ConsoleObserver};
use descry_kernel::solvers::select_solvers;
use descry_search::driver::solve;
use descry_search::node::Candidate;
use descry_search::report::{OutputRecord, RecordKind, SolveObserver, SolveOutcome};

use clap::Parser;

#[derive(Default)]
struct Collector {
    records: Vec<(RecordKind, String)>,
    pops: Vec<String>,
}

impl SolveObserver for Collector {
    fn on_record(&mut self, kind: RecordKind, record: &OutputRecord<'_>) {
        self.records.push((kind, format_record(kind, record)));
    }

    fn on_candidate(&mut self, node: &Candidate) {
        self.pops.push(node.method.clone());
    }
}

fn run(argv: &[&str]) -> (SolveOutcome, Collector) {
    let args = Args::try_parse_from(std::iter::once("descry").chain(argv.iter().copied()))
        .expect("argv must parse");
    let input = args.resolve_input().expect("input must resolve");
    let solvers = select_solvers(&args.algorithms).expect("algorithms must resolve");
    let keychain = args.build_keychain().expect("keychain must build");
    let policy = args.solve_policy();

    let mut collector = Collector::default();
    let outcome = solve(&input, &solvers, &keychain, &policy, &mut collector);
    (outcome, collector)
}

#[test]
fn base64_ciphertext_solves_at_depth_one() {
    let (outcome, _) = run(&["-t", "S", "-i", "SGVsbG8gV29ybGQ=", "-d", "1"]);

    assert_eq!(outcome.best.data, b"Hello World");
    assert_eq!(outcome.best.method, "CIPHERTEXT -> BASE64");
    assert!((outcome.best.fitness - 1.0).abs() < f32::EPSILON);
}

#[test]
fn vigenere_with_supplied_key_recovers_rot13() {
    let (outcome, _) = run(&[
        "-t", "S", "-i", "Uryyb Jbeyq", "-k", "N", "-d", "1", "-a", "VIGENERE",
    ]);

    assert_eq!(outcome.best.data, b"Hello World");
    assert!(outcome.best.method.contains("VIGENERE(N)"));
}

#[test]
fn affine_brute_force_finds_the_caesar_key() {
    let (_, collector) = run(&["-t", "S", "-i", "KHOOR ZRUOG", "-d", "1", "-a", "AFFINE"]);

    let hits: Vec<&String> = collector
        .pops
        .iter()
        .filter(|m| m.as_str() == "CIPHERTEXT -> AFFINE a=1 b=3")
        .collect();
    assert_eq!(hits.len(), 1);
}

#[test]
fn morse_decodes_to_hello() {
    let (outcome, _) = run(&["-t", "S", "-i", ".... . .-.. .-.. ---", "-a", "MORSE", "-d", "1"]);

    assert_eq!(outcome.best.data, b"HELLO");
    assert!(outcome.best.fitness >= 0.5);
}

#[test]
fn crib_short_circuits_the_matching_candidate() {
    let (outcome, collector) = run(&[
        "-t", "S", "-i", "SGVsbG8gV29ybGQ=", "-c", "World", "-d", "2", "-T", "3",
    ]);

    let crib_lines: Vec<&String> = collector
        .records
        .iter()
        .filter(|(kind, _)| *kind == RecordKind::CribFound)
        .map(|(_, line)| line)
        .collect();
    assert!(!crib_lines.is_empty());
    assert!(crib_lines[0].contains("[CRIB FOUND]"));
    assert!(crib_lines[0].contains("\"Hello World\""));

    // The crib hit was never expanded.
    assert!(collector
        .pops
        .iter()
        .all(|m| !m.starts_with("CIPHERTEXT -> BASE64 -> ")));
    // Other branches kept expanding.
    assert!(outcome.stats.expansions > 1);
}

#[test]
fn probability_threshold_emits_output_records() {
    let (_, collector) = run(&["-t", "S", "-i", "SGVsbG8gV29ybGQ=", "-p", "50", "-d", "1"]);

    let outputs: Vec<&String> = collector
        .records
        .iter()
        .filter(|(kind, _)| *kind == RecordKind::Output)
        .map(|(_, line)| line)
        .collect();
    assert!(outputs
        .iter()
        .any(|line| line.contains("[OUTPUT] \"Hello World\" - Method: \"CIPHERTEXT -> BASE64\"")));
}

#[test]
fn english_threshold_appends_eng_lines() {
    let (outcome, collector) = run(&[
        "-t", "S", "-i", "Uryyb Jbeyq", "-k", "N", "-a", "VIGENERE", "-E", "60", "-d", "1",
    ]);

    assert_eq!(outcome.best.data, b"Hello World");
    let hit = collector
        .records
        .iter()
        .find(|(_, line)| line.contains("\"Hello World\""))
        .map(|(_, line)| line)
        .expect("the decrypted child must pass the English threshold");
    assert!(hit.contains("[ENG: "), "{hit}");
}

#[test]
fn keyfile_keys_feed_the_keychain() {
    let mut keyfile = tempfile::NamedTempFile::new().unwrap();
    writeln!(keyfile, "WRONGKEY").unwrap();
    writeln!(keyfile).unwrap();
    writeln!(keyfile, "N").unwrap();
    keyfile.flush().unwrap();

    let path = keyfile.path().to_str().unwrap();
    let (_, collector) = run(&[
        "-t", "S", "-i", "Uryyb Jbeyq", "-K", path, "-a", "VIGENERE", "-d", "1",
    ]);

    // Both non-empty keyfile lines produced a decryption attempt.
    assert!(collector
        .pops
        .iter()
        .any(|m| m == "CIPHERTEXT -> VIGENERE(WRONGKEY)"));
    assert!(collector.pops.iter().any(|m| m == "CIPHERTEXT -> VIGENERE(N)"));
}

#[test]
fn output_file_mirrors_emitted_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.txt");

    let args = Args::try_parse_from([
        "descry", "-t", "S", "-i", "SGVsbG8gV29ybGQ=", "-p", "50", "-d", "1",
    ])
    .unwrap();
    let input = args.resolve_input().unwrap();
    let solvers = select_solvers(&args.algorithms).unwrap();
    let keychain = args.build_keychain().unwrap();
    let policy = args.solve_policy();

    let mirror = std::fs::File::create(&path).unwrap();
    let mut observer = ConsoleObserver::new(Some(mirror), false);
    let _ = solve(&input, &solvers, &keychain, &policy, &mut observer);

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[OUTPUT] \"Hello World\""), "{contents}");
}
