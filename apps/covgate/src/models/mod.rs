//! Shared data models for coverage summaries and comparison output.

pub mod summary;

pub use summary::{CategoryCoverage, CoverageSummary};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Per-category percentage-point delta against the baseline
/// (current minus baseline; all zero when no baseline exists).
pub struct CoverageDiff {
    pub lines: i64,
    pub functions: i64,
    pub branches: i64,
    pub statements: i64,
}

impl CoverageDiff {
    pub fn zero() -> Self {
        CoverageDiff {
            lines: 0,
            functions: 0,
            branches: 0,
            statements: 0,
        }
    }

    /// Percentage-point differences between two summaries.
    pub fn between(current: &CoverageSummary, baseline: &CoverageSummary) -> Self {
        fn delta(cur: &CategoryCoverage, base: &CategoryCoverage) -> i64 {
            cur.percentage as i64 - base.percentage as i64
        }
        CoverageDiff {
            lines: delta(&current.lines, &baseline.lines),
            functions: delta(&current.functions, &baseline.functions),
            branches: delta(&current.branches, &baseline.branches),
            statements: delta(&current.statements, &baseline.statements),
        }
    }
}

#[derive(Debug, Serialize)]
/// Outcome of a coverage comparison. `reason` is present only on failure
/// and is omitted from JSON when absent; `baseline` serializes as null
/// when no baseline was loaded.
pub struct CoverageComparison {
    pub passed: bool,
    pub current: CoverageSummary,
    pub baseline: Option<CoverageSummary>,
    pub diff: CoverageDiff,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
