//! Coverage gate decision.
//!
//! Applies two fixed thresholds to a parsed coverage summary, optionally
//! against a baseline. Only the `lines` category gates the result; the
//! other categories are computed and surfaced for reporting but never
//! drive the decision. The checks run in a fixed order and the first
//! failing one wins:
//! 1. report unparseable
//! 2. line coverage below `MIN_COVERAGE`
//! 3. line coverage dropped more than `MAX_DROP` points vs the baseline

use crate::baseline::load_baseline;
use crate::models::{CoverageComparison, CoverageDiff, CoverageSummary};
use crate::report::parse_coverage_report;
use std::path::Path;

/// Minimum acceptable line coverage, in whole percent.
pub const MIN_COVERAGE: u64 = 75;

/// Maximum allowed drop in line coverage versus the baseline, in
/// percentage points. The check is strict: a drop of exactly this many
/// points still passes.
pub const MAX_DROP: i64 = 5;

/// Decide pass/fail for `current` coverage against an optional baseline.
///
/// Pure function: both inputs are whatever the loaders produced, with
/// `None` meaning the data was absent or unreadable. A missing baseline
/// reports all diffs as 0 and skips the drop check.
pub fn compare(
    current: Option<CoverageSummary>,
    baseline: Option<CoverageSummary>,
) -> CoverageComparison {
    let current = match current {
        Some(c) => c,
        None => {
            return CoverageComparison {
                passed: false,
                current: CoverageSummary::zero(),
                baseline: None,
                diff: CoverageDiff::zero(),
                reason: Some("Failed to parse current coverage report".to_string()),
            };
        }
    };

    let diff = match baseline.as_ref() {
        Some(base) => CoverageDiff::between(&current, base),
        None => CoverageDiff::zero(),
    };

    if current.lines.percentage < MIN_COVERAGE {
        return CoverageComparison {
            passed: false,
            reason: Some(format!(
                "Line coverage {}% is below minimum {}%",
                current.lines.percentage, MIN_COVERAGE
            )),
            current,
            baseline,
            diff,
        };
    }

    if baseline.is_some() && diff.lines < -MAX_DROP {
        return CoverageComparison {
            passed: false,
            reason: Some(format!(
                "Line coverage dropped by {}% (max allowed: {}%)",
                diff.lines.abs(),
                MAX_DROP
            )),
            current,
            baseline,
            diff,
        };
    }

    CoverageComparison {
        passed: true,
        current,
        baseline,
        diff,
        reason: None,
    }
}

/// Load the report and baseline from disk and run the comparison.
pub fn compare_paths(coverage_path: &Path, baseline_dir: &Path) -> CoverageComparison {
    compare(
        parse_coverage_report(coverage_path),
        load_baseline(baseline_dir),
    )
}
