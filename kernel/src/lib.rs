//! Descry Kernel: the domain primitives of the descry cryptanalysis tool.
//!
//! # API Surface
//!
//! - [`score`] -- text-quality heuristics (printability, entropy, English-likeness)
//! - [`codec`] -- reversible byte-level decoders (hex, binary, octal, Base64, radix)
//! - [`solvers`] -- the solver registry: decoders plus classical-cipher brute-forcers
//! - [`analyzers`] -- label-only classifiers for the analyze pass
//! - [`keychain`] -- ordered key list consumed by keyed solvers
//!
//! # Module Dependency Direction
//!
//! `score` ← `codec` ← `solvers`
//!
//! One-way only. `solvers` depends on `codec` and `score`; `analyzers`
//! depends on `score`; `keychain` depends on nothing internal. No module in
//! this crate performs I/O.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod analyzers;
pub mod codec;
pub mod keychain;
pub mod score;
pub mod solvers;
