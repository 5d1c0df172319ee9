//! Command-line argument definitions and post-parse resolution.
//!
//! Parsing itself is delegated to `clap`; the helpers here turn parsed
//! options into the library-level inputs (ciphertext bytes, keychain,
//! solve policy). They are plain methods over the parsed struct so tests
//! can drive them without touching `std::env`.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use descry_kernel::keychain::Keychain;
use descry_search::policy::SolvePolicy;

/// Analyze threshold applied when `--probability` is not given.
const DEFAULT_PROBABILITY: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Task {
    /// Label the input with likely encodings and hashes.
    #[value(name = "A")]
    Analyze,
    /// Search for a decoding/decryption path to plausible plaintext.
    #[value(name = "S")]
    Solve,
}

#[derive(Debug, Parser)]
#[command(
    name = "descry",
    version,
    about = "descry - cryptography analysis and processing tool"
)]
pub struct Args {
    /// Task type: A for analyze, S for solve
    #[arg(short = 't', long, value_enum, ignore_case = true)]
    pub task: Task,

    /// Inline ciphertext input
    #[arg(short = 'i', long)]
    pub input: Option<String>,

    /// Ciphertext input from file
    #[arg(short = 'I', long, value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Probability/fitness threshold (0-100) for output emission
    #[arg(short = 'p', long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub probability: Option<u8>,

    /// English quality threshold (0-100); enables English-mode filtering
    #[arg(short = 'E', long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub english: Option<u8>,

    /// Monitor a specific path substring (diagnostic logging)
    #[arg(short = 'm', long)]
    pub monitor: Option<String>,

    /// Algorithms to use: comma-separated labels or the "common" preset
    #[arg(short = 'a', long, default_value = "common")]
    pub algorithms: String,

    /// Depth of algorithm combinations
    #[arg(short = 'd', long, default_value_t = 1)]
    pub depth: u32,

    /// Keys (raw); repeatable, segments joined by '|'
    #[arg(short = 'k', long = "keys")]
    pub keys: Vec<String>,

    /// Key file, one key per line
    #[arg(short = 'K', long, value_name = "FILE")]
    pub keyfile: Option<PathBuf>,

    /// Known string to search for (early-exit marker)
    #[arg(short = 'c', long)]
    pub crib: Option<String>,

    /// Output file to mirror results
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Silent mode (hide the top-paths summary)
    #[arg(short = 's', long)]
    pub silent: bool,

    /// Timeout in seconds for solving (0 disables)
    #[arg(short = 'T', long, default_value_t = 10)]
    pub timeout: u64,

    /// Max heap size for solving
    #[arg(
        short = 'H',
        long = "heap-size",
        default_value_t = 10_000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub heap_size: u64,

    /// Produce verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve the ciphertext: inline input wins over a file.
    ///
    /// File input is trimmed of trailing whitespace.
    ///
    /// # Errors
    ///
    /// Fails when neither source is given or the file cannot be read.
    pub fn resolve_input(&self) -> anyhow::Result<Vec<u8>> {
        if let Some(inline) = &self.input {
            return Ok(inline.clone().into_bytes());
        }
        if let Some(path) = &self.input_file {
            let mut bytes = fs::read(path)
                .with_context(|| format!("could not open input file: {}", path.display()))?;
            while bytes
                .last()
                .is_some_and(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            {
                bytes.pop();
            }
            return Ok(bytes);
        }
        bail!("missing required input (use --input or --input-file)")
    }

    /// Assemble the keychain from repeated `--keys` values plus the keyfile.
    ///
    /// # Errors
    ///
    /// Fails when the keyfile cannot be read.
    pub fn build_keychain(&self) -> anyhow::Result<Keychain> {
        let mut parts = self.keys.clone();
        if let Some(path) = &self.keyfile {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("could not open key file: {}", path.display()))?;
            parts.extend(
                contents
                    .lines()
                    .filter(|line| !line.is_empty())
                    .map(str::to_owned),
            );
        }
        Ok(Keychain::from_parts(parts))
    }

    /// Translate the percentage options into a solve policy.
    #[must_use]
    pub fn solve_policy(&self) -> SolvePolicy {
        SolvePolicy {
            max_depth: self.depth,
            max_frontier_size: usize::try_from(self.heap_size).unwrap_or(usize::MAX),
            timeout: Duration::from_secs(self.timeout),
            fitness_threshold: self.probability.map(|p| f32::from(p) / 100.0),
            english_threshold: self.english.map(|e| f32::from(e) / 100.0),
            crib: self.crib.clone(),
            monitor: self.monitor.clone(),
        }
    }

    /// Threshold for the analyze pass (falls back to 1%).
    #[must_use]
    pub fn analyze_threshold(&self) -> f32 {
        f32::from(self.probability.unwrap_or(DEFAULT_PROBABILITY)) / 100.0
    }
}
