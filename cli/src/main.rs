//! Binary entry point for the `descry` command-line tool.
//!
//! # Control flow
//!
//! 1. `clap` parses the option surface into [`Args`].
//! 2. `--verbose` raises the tracing filter to DEBUG.
//! 3. The task dispatches to the analyze loop or the solve engine; the
//!    solve engine reports through [`ConsoleObserver`].
//!
//! Usage errors and unreadable files surface as stderr diagnostics with a
//! nonzero exit; an empty successful run exits 0 after the
//! "No high-probability ..." line.

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use descry_cli::analyze::run_analysis;
use descry_cli::args::{Args, Task};
use descry_cli::output::{display_data, print_best, ConsoleObserver};
use descry_kernel::solvers::select_solvers;
use descry_search::driver::solve;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_analyze(args: &Args) -> anyhow::Result<()> {
    let input = args.resolve_input()?;
    println!(
        "[INFO] Running analysis on input: \"{}\"",
        String::from_utf8_lossy(&input)
    );

    let findings = run_analysis(&input, args.analyze_threshold());
    for finding in &findings {
        println!(
            "[{:.0}%]\t [{}] {}",
            finding.analysis.probability * 100.0,
            finding.label,
            finding.analysis.message
        );
    }
    if findings.is_empty() {
        println!("[INFO] No high-probability analysis results found.");
    }
    Ok(())
}

fn run_solve(args: &Args) -> anyhow::Result<()> {
    let input = args.resolve_input()?;
    let solvers = select_solvers(&args.algorithms)?;
    let keychain = args.build_keychain()?;
    let policy = args.solve_policy();

    debug!(algorithms = %args.algorithms, depth = policy.max_depth, "solve configuration");
    debug!(keys = ?keychain.keys(), "keychain");
    debug!(
        probability = ?policy.fitness_threshold,
        english = ?policy.english_threshold,
        heap_size = policy.max_frontier_size,
        "thresholds"
    );

    println!(
        "[INFO] Running solving on input: \"{}\" (Timeout: {}s)",
        display_data(&input),
        args.timeout
    );
    let labels: Vec<&str> = solvers.iter().map(|s| s.label).collect();
    println!(
        "[INFO] Loaded {} algorithms: {}",
        solvers.len(),
        labels.join(", ")
    );

    let mirror = args
        .output
        .as_ref()
        .map(std::fs::File::create)
        .transpose()
        .with_context(|| "could not open output file")?;
    let mut observer = ConsoleObserver::new(mirror, !args.silent);

    println!("[INFO] Running solvers...");
    let outcome = solve(&input, &solvers, &keychain, &policy, &mut observer);

    if outcome.stats.timed_out {
        println!("[INFO] Timeout reached ({}s). Stopping...", args.timeout);
    }
    if outcome.stats.expansions == 0 {
        println!("[INFO] No high-probability solving results found.");
    }
    debug!(stats = ?outcome.stats, "run counters");

    if let Some(view) = observer.into_view() {
        if !view.is_empty() {
            print!("{}", view.render());
        }
    }

    print_best(&outcome.best, policy.english_mode());
    println!("[INFO] Solving process finished.");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match args.task {
        Task::Analyze => run_analyze(&args),
        Task::Solve => run_solve(&args),
    }
}
