//! Modification-time-based freshness detection for compiled wasm artifacts.
//!
//! This crate decides whether a previously produced build output can be reused
//! or must be regenerated, by comparing filesystem modification timestamps of
//! the crate's source tree and build manifest against a reference artifact
//! from the last successful build. No file contents are read: staleness is a
//! pure timestamp comparison at the moment of the check.

#![warn(missing_docs)]

pub mod checker;
pub mod verdict;

pub use checker::check_freshness;
pub use verdict::{FreshnessVerdict, RebuildReason};
