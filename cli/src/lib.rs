//! Descry CLI: argument surface, analyze loop, and console output for the
//! `descry` binary.
//!
//! The binary itself is a thin dispatcher; everything testable lives here.

#![forbid(unsafe_code)]

pub mod analyze;
pub mod args;
pub mod output;
pub mod view;
