//! Descry Search: best-first search over solver compositions.
//!
//! This crate provides the solve engine. It depends only on
//! `descry_kernel` and performs no I/O; callers observe the run through the
//! [`report::SolveObserver`] trait.
//!
//! # Crate dependency graph
//!
//! ```text
//! descry_kernel  ←  descry_search  ←  descry_cli
//! (solvers, scoring)  (frontier, driver)   (arguments, output)
//! ```
//!
//! # Key types
//!
//! - [`node::Candidate`] -- a point in the search graph with its path
//! - [`frontier::Frontier`] -- priority set of owned candidates
//! - [`policy::SolvePolicy`] -- budgets, thresholds, and markers for a run
//! - [`report::SolveObserver`] -- callbacks for records, monitor taps, pops
//! - [`driver::solve`] -- the expansion loop

#![forbid(unsafe_code)]

pub mod driver;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod report;
