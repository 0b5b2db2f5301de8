//! Baseline persistence.
//!
//! The baseline is a previously saved `CoverageSummary`, stored as
//! `coverage-summary.json` inside the baseline directory with 2-space
//! indentation. Loading is graceful: an absent directory or file, or a
//! document that does not match the summary shape, means "no baseline",
//! never an error. Saving creates the directory when needed and overwrites
//! any existing file.

use crate::models::CoverageSummary;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the stored baseline inside the baseline directory.
pub const BASELINE_FILE: &str = "coverage-summary.json";

/// Load the baseline summary from `dir`, if one exists and parses.
pub fn load_baseline(dir: &Path) -> Option<CoverageSummary> {
    let path = dir.join(BASELINE_FILE);
    let content = fs::read_to_string(&path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Persist `summary` as the new baseline under `dir`, returning the path
/// written. Creates `dir` if absent; overwrites an existing baseline.
pub fn save_baseline(summary: &CoverageSummary, dir: &Path) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(BASELINE_FILE);
    let body = serde_json::to_string_pretty(summary).unwrap();
    fs::write(&path, body)?;
    Ok(path)
}
