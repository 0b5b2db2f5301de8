//! Covgate core library.
//!
//! This crate exposes programmatic APIs for parsing browser coverage
//! reports, comparing them against a stored baseline, and persisting new
//! baselines for CI gating.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `report`: Tolerant parsing of the JSON coverage report.
//! - `baseline`: Baseline load/save with graceful absence handling.
//! - `compare`: Threshold constants and the pass/fail decision.
//! - `models`: Data models for summaries, diffs, and comparison output.
//! - `output`: Human/JSON printers and description rendering.
//! - `utils`: Supporting helpers.
//!
//! Note: All documentation comments are written in English by convention.
pub mod baseline;
pub mod cli;
pub mod compare;
pub mod config;
pub mod models;
pub mod output;
pub mod report;
pub mod utils;
