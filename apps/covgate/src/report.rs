//! Coverage report parsing.
//!
//! Reads the JSON report emitted by the browser coverage reporter: an array
//! of entries, each optionally carrying a `coverage` object with maps keyed
//! by source-location id:
//! - `l` (lines), `f` (functions), `s` (statements): hit counts; > 0 means
//!   covered.
//! - `b` (branches): arrays of per-arm hit counts; every arm counts toward
//!   the total, arms with count > 0 count as covered.
//!
//! Parsing is tolerant by contract: entries without a usable `coverage`
//! object contribute nothing, and a document that is valid JSON but not an
//! array yields the all-zero summary. Only a missing, unreadable, or
//! JSON-invalid file returns `None`.

use crate::models::{CategoryCoverage, CoverageSummary};
use serde_json::Value as Json;
use std::fs;
use std::path::Path;

#[derive(Default)]
struct Tally {
    total: u64,
    covered: u64,
}

impl Tally {
    fn record(&mut self, hits: Option<f64>) {
        self.total += 1;
        // Non-numeric hit values count toward the total but never as covered
        if hits.map_or(false, |h| h > 0.0) {
            self.covered += 1;
        }
    }

    fn into_category(self) -> CategoryCoverage {
        CategoryCoverage::from_counts(self.covered, self.total)
    }
}

/// Parse the coverage report at `path` into per-category totals.
///
/// Returns `None` when the file is missing, unreadable, or not valid JSON;
/// any other input degrades to whatever data it carries (possibly none).
pub fn parse_coverage_report(path: &Path) -> Option<CoverageSummary> {
    let content = fs::read_to_string(path).ok()?;
    let data: Json = serde_json::from_str(&content).ok()?;

    let mut lines = Tally::default();
    let mut functions = Tally::default();
    let mut branches = Tally::default();
    let mut statements = Tally::default();

    if let Some(entries) = data.as_array() {
        for entry in entries {
            let cov = match entry.get("coverage").and_then(Json::as_object) {
                Some(c) => c,
                None => continue,
            };
            if let Some(map) = cov.get("l").and_then(Json::as_object) {
                for hit in map.values() {
                    lines.record(hit.as_f64());
                }
            }
            if let Some(map) = cov.get("f").and_then(Json::as_object) {
                for hit in map.values() {
                    functions.record(hit.as_f64());
                }
            }
            if let Some(map) = cov.get("b").and_then(Json::as_object) {
                for arms in map.values() {
                    if let Some(arms) = arms.as_array() {
                        for arm in arms {
                            branches.record(arm.as_f64());
                        }
                    }
                }
            }
            if let Some(map) = cov.get("s").and_then(Json::as_object) {
                for hit in map.values() {
                    statements.record(hit.as_f64());
                }
            }
        }
    }

    Some(CoverageSummary {
        lines: lines.into_category(),
        functions: functions.into_category(),
        branches: branches.into_category(),
        statements: statements.into_category(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_report(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("coverage-final.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_parse_counts_all_categories() {
        let tmp = tempdir().unwrap();
        let path = write_report(
            tmp.path(),
            r#"[
              {
                "url": "http://localhost:5173/src/app.tsx",
                "coverage": {
                  "l": {"1": 3, "2": 0, "3": 1},
                  "f": {"0": 1, "1": 0},
                  "b": {"0": [1, 0], "1": [2, 2, 0]},
                  "s": {"0": 5, "1": 5, "2": 0, "3": 0}
                }
              }
            ]"#,
        );
        let summary = parse_coverage_report(&path).unwrap();
        assert_eq!(summary.lines.total, 3);
        assert_eq!(summary.lines.covered, 2);
        assert_eq!(summary.lines.percentage, 66);
        assert_eq!(summary.functions.total, 2);
        assert_eq!(summary.functions.covered, 1);
        assert_eq!(summary.branches.total, 5);
        assert_eq!(summary.branches.covered, 3);
        assert_eq!(summary.statements.total, 4);
        assert_eq!(summary.statements.covered, 2);
    }

    #[test]
    fn test_parse_aggregates_entries() {
        let tmp = tempdir().unwrap();
        let path = write_report(
            tmp.path(),
            r#"[
              {"coverage": {"l": {"1": 1}}},
              {"coverage": {"l": {"1": 0, "2": 4}}},
              {"url": "no coverage key here"}
            ]"#,
        );
        let summary = parse_coverage_report(&path).unwrap();
        assert_eq!(summary.lines.total, 3);
        assert_eq!(summary.lines.covered, 2);
        assert_eq!(summary.functions.total, 0);
    }

    #[test]
    fn test_missing_file_is_none() {
        let tmp = tempdir().unwrap();
        assert!(parse_coverage_report(&tmp.path().join("nope.json")).is_none());
    }

    #[test]
    fn test_invalid_json_is_none() {
        let tmp = tempdir().unwrap();
        let path = write_report(tmp.path(), "not valid json {");
        assert!(parse_coverage_report(&path).is_none());
    }

    #[test]
    fn test_non_array_document_is_zero_data() {
        let tmp = tempdir().unwrap();
        let path = write_report(tmp.path(), r#"{"coverage": {"l": {"1": 1}}}"#);
        let summary = parse_coverage_report(&path).unwrap();
        assert_eq!(summary, CoverageSummary::zero());
    }

    #[test]
    fn test_malformed_pieces_are_skipped() {
        let tmp = tempdir().unwrap();
        let path = write_report(
            tmp.path(),
            r#"[
              {"coverage": "not an object"},
              {"coverage": {"l": [1, 2, 3], "b": {"0": "not an array", "1": [1]}}},
              {"coverage": {"l": {"1": "three", "2": 2}}}
            ]"#,
        );
        let summary = parse_coverage_report(&path).unwrap();
        // string hit counts toward the total, never as covered
        assert_eq!(summary.lines.total, 2);
        assert_eq!(summary.lines.covered, 1);
        // non-array branch value skipped entirely
        assert_eq!(summary.branches.total, 1);
        assert_eq!(summary.branches.covered, 1);
    }

    #[test]
    fn test_empty_array_is_zero_data() {
        let tmp = tempdir().unwrap();
        let path = write_report(tmp.path(), "[]");
        let summary = parse_coverage_report(&path).unwrap();
        assert_eq!(summary, CoverageSummary::zero());
        assert_eq!(summary.lines.percentage, 0);
    }
}
