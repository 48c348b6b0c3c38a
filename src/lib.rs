//! Comche core library.
//!
//! This crate exposes programmatic APIs for scanning source files for
//! marker comments (`# TODO`, `# FIXME`, `# BUG`) and deciding pass/fail
//! against a finding threshold.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `patterns`: Tag pattern compilation.
//! - `discover`: File discovery for commit/root addressing modes.
//! - `scan`: Per-file line scanning and the concurrent coordinator.
//! - `report`: Threshold evaluation over the aggregate.
//! - `models`: Data models for findings, reports, and the summary.
//! - `output`: Human/JSON printers for scan results.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod discover;
pub mod models;
pub mod output;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod utils;
